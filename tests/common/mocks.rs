use async_trait::async_trait;
use dietlens::{
    Error, Result,
    llm::LlmClient,
    vision::{Label, VisionClient},
};
use std::sync::{Arc, Mutex};

/// Mock LLM client for testing
#[derive(Debug)]
pub struct MockLlmClient {
    pub responses: Arc<Mutex<Vec<String>>>,
    pub prompts: Arc<Mutex<Vec<String>>>,
    pub error: Option<String>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            prompts: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_response(self, response: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push(response.into());
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Prompts the client was called with, in call order.
    pub fn prompts(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.prompts)
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        if let Some(ref error) = self.error {
            return Err(Error::llm(error.clone()));
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::llm("No more mock responses available"));
        }

        Ok(responses.remove(0))
    }
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Mock vision client for testing
#[derive(Debug)]
pub struct MockVisionClient {
    pub labels: Arc<Mutex<Vec<Label>>>,
    pub calls: Arc<Mutex<Vec<usize>>>,
    pub error: Option<String>,
}

impl MockVisionClient {
    pub fn new() -> Self {
        Self {
            labels: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_labels(self, labels: Vec<Label>) -> Self {
        *self.labels.lock().unwrap() = labels;
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Image sizes (in bytes) the client was called with, in call order.
    pub fn calls(&self) -> Arc<Mutex<Vec<usize>>> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl VisionClient for MockVisionClient {
    async fn label_image(&self, image: &[u8]) -> Result<Vec<Label>> {
        self.calls.lock().unwrap().push(image.len());

        if let Some(ref error) = self.error {
            return Err(Error::vision(error.clone()));
        }

        Ok(self.labels.lock().unwrap().clone())
    }
}

impl Default for MockVisionClient {
    fn default() -> Self {
        Self::new()
    }
}

pub fn label(description: &str, confidence: f32) -> Label {
    Label {
        description: description.to_string(),
        confidence,
    }
}

/// A well-formed five-section model response.
pub fn sectioned_response() -> String {
    "[1. 식사 요약]\n치킨과 밥 위주의 식사입니다.\n\
     [2. 주요 영양소 평가]\n단백질은 충분하지만 식이섬유가 부족합니다.\n\
     [3. 보완 제안 (영양제 또는 음식)]\n비타민 C 보충제를 추천합니다.\n\
     [4. 식단 개선 포인트]\n채소 반찬을 추가하세요.\n\
     [5. 피드백 한 마디]\n좋은 출발입니다!"
        .to_string()
}
