use dietlens::report::{DisplayCategory, Report, Section, parse_sections};
use pretty_assertions::assert_eq;

#[test]
fn test_two_section_response() {
    let sections = parse_sections("[1. 요약]내용A[2. 영양소 평가]내용B");
    assert_eq!(
        sections,
        vec![
            Section {
                title: "[1. 요약]".to_string(),
                body: "내용A".to_string(),
            },
            Section {
                title: "[2. 영양소 평가]".to_string(),
                body: "내용B".to_string(),
            },
        ]
    );
}

#[test]
fn test_plain_text_yields_no_sections_and_fallback_keeps_text_verbatim() {
    let response = "just plain text";
    assert!(parse_sections(response).is_empty());

    let report = Report::from_response(response);
    assert!(report.sections.is_empty());
    assert_eq!(report.raw.as_deref(), Some(response));
}

#[test]
fn test_reserialized_sections_preserve_header_text_and_order() {
    let response = "머리말 텍스트\n[1. 식사 요약]\n내용 하나\n[2. 주요 영양소 평가]\n내용 둘\n[5. 피드백 한 마디]\n내용 다섯";
    let sections = parse_sections(response);

    let reserialized: String = sections
        .iter()
        .map(|section| format!("{}{}", section.title, section.body))
        .collect();

    // Header tokens survive verbatim and in first-occurrence order
    let mut search_from = 0;
    for section in &sections {
        let position = reserialized[search_from..]
            .find(&section.title)
            .expect("header text preserved");
        search_from += position + section.title.len();
        assert!(response.contains(&section.title));
    }
    assert_eq!(
        sections.iter().map(|s| s.title.as_str()).collect::<Vec<_>>(),
        vec!["[1. 식사 요약]", "[2. 주요 영양소 평가]", "[5. 피드백 한 마디]"]
    );
}

#[test]
fn test_parse_is_idempotent_on_well_formed_input() {
    let response = "[1. 요약]내용A[2. 영양소 평가]내용B";
    let first = parse_sections(response);

    let reserialized: String = first
        .iter()
        .map(|section| format!("{}{}", section.title, section.body))
        .collect();
    let second = parse_sections(&reserialized);

    assert_eq!(first, second);
}

#[test]
fn test_text_between_unpaired_fragments_is_discarded() {
    // Preamble and trailing stray text around a lone header
    let sections = parse_sections("참고하세요.\n[1. 요약]본문입니다.");
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].body, "본문입니다.");
}

#[test]
fn test_full_five_section_response() {
    let response = "[1. 식사 요약]\n요약 내용\n[2. 주요 영양소 평가]\n평가 내용\n[3. 보완 제안 (영양제 또는 음식)]\n제안 내용\n[4. 식단 개선 포인트]\n개선 내용\n[5. 피드백 한 마디]\n피드백 내용";
    let sections = parse_sections(response);

    assert_eq!(sections.len(), 5);
    assert_eq!(sections[2].title, "[3. 보완 제안 (영양제 또는 음식)]");
    assert_eq!(sections[3].body, "개선 내용");
}

#[test]
fn test_classification_of_parsed_titles() {
    assert_eq!(
        DisplayCategory::from_title("[3. 보완 제안]"),
        DisplayCategory::Supplement
    );
    assert_eq!(
        DisplayCategory::from_title("[5. 피드백 한 마디]"),
        DisplayCategory::Feedback
    );
    assert_eq!(
        DisplayCategory::from_title("[9. 기타]"),
        DisplayCategory::Generic
    );
}

#[test]
fn test_bracketed_text_without_number_is_not_a_header() {
    let sections = parse_sections("[주의] 이것은 헤더가 아닙니다 [1. 요약]내용");
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].title, "[1. 요약]");
}

#[test]
fn test_header_requires_space_after_period() {
    assert!(parse_sections("[1.요약]내용").is_empty());
}

#[test]
fn test_windows_line_endings() {
    let sections = parse_sections("[1. 요약]\r\n내용A\r\n[2. 영양소]\r\n내용B");
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].body, "내용A");
    assert_eq!(sections[1].body, "내용B");
}
