use crate::analysis::UserProfile;

pub const NO_MEAL_TEXT: &str = "입력 없음";
pub const NO_LABELS: &str = "없음";

/// Renders the fixed analysis prompt. Pure string formatting; the five
/// numbered sections requested here are what the response parser expects
/// back.
pub fn build_analysis_prompt(
    profile: &UserProfile,
    meal_text: Option<&str>,
    labels: &[String],
) -> String {
    let meal = match meal_text.map(str::trim) {
        Some(text) if !text.is_empty() => text,
        _ => NO_MEAL_TEXT,
    };

    let label_list = if labels.is_empty() {
        NO_LABELS.to_string()
    } else {
        labels.join(", ")
    };

    format!(
        "사용자 정보:\n\
         - 성별: {sex}\n\
         - 키: {height}cm\n\
         - 체중: {weight}kg\n\
         - 목표: {goal}\n\
         \n\
         오늘의 식사:\n\
         {meal}\n\
         \n\
         이미지에서 인식된 음식들:\n\
         {labels}\n\
         \n\
         분석 기준:\n\
         [1. 식사 요약]\n\
         [2. 주요 영양소 평가]\n\
         [3. 보완 제안 (영양제 또는 음식)]\n\
         [4. 식단 개선 포인트]\n\
         [5. 피드백 한 마디]\n\
         \n\
         특히 [4]번 항목에서는 잘못된 식단 구성, 부족한 부분, 지나친 부분을 \
         실천 가능한 수준으로 상세히 조언하고, 부족한 영양소로 인해 생길 수 \
         있는 증상도 함께 설명해줘.",
        sex = profile.sex,
        height = profile.height_cm,
        weight = profile.weight_kg,
        goal = profile.goal,
        meal = meal,
        labels = label_list,
    )
}
