use serde::{Deserialize, Serialize};

use crate::openai::OpenAIConfig;

/// Width and height of a generated image.
#[derive(Clone, Debug, Copy)]
pub struct ImageSize {
    width: u64,
    height: u64,
}

impl ImageSize {
    pub fn new(width: u64, height: u64) -> Self {
        Self { width, height }
    }

    pub fn resize(mut self, width: Option<u64>, height: Option<u64>) -> Self {
        if let Some(width) = width {
            self.width = width;
        }
        if let Some(height) = height {
            self.height = height;
        }
        self
    }
}

impl ToString for ImageSize {
    fn to_string(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }
}

/// Payload for the image generations endpoint.
///
/// Generates an original image from a text prompt. Square, standard quality
/// images are the fastest to generate.
///
/// # Example
///
/// ```
/// use aipost::openai::{Image, OpenAIConfig};
///
/// let payload = Image::default().set_prompt("a white siamese cat");
/// ```
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Image {
    /// ID of the model to use.
    pub model: String,

    /// A text description of the desired image(s).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,

    /// The size of the generated images, as `"{width}x{height}"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,

    /// The number of images to generate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n: Option<u64>,
}

impl Image {
    const DEFAULT_MODEL: &'static str = "dall-e-3";
    const DEFAULT_SIZE: &'static str = "1024x1024";
    const DEFAULT_N: u64 = 1;

    pub fn get_default_model() -> &'static str {
        Self::DEFAULT_MODEL
    }

    pub fn get_default_size() -> &'static str {
        Self::DEFAULT_SIZE
    }

    pub fn get_default_n() -> u64 {
        Self::DEFAULT_N
    }

    pub fn set_model<S: Into<String>>(mut self, model: S) -> Self {
        self.model = model.into();
        self
    }

    pub fn set_prompt<S: Into<String>>(mut self, prompt: S) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    pub fn set_size(mut self, size: &ImageSize) -> Self {
        self.size = Some(size.to_string());
        self
    }

    pub fn set_max_images(mut self, number_of_images: u64) -> Self {
        self.n = Some(number_of_images);
        self
    }
}

impl OpenAIConfig for Image {
    fn endpoint() -> &'static str {
        "https://api.openai.com/v1/images/generations"
    }

    fn default() -> Self {
        Self {
            model: Self::get_default_model().into(),
            prompt: None,
            size: Some(Self::get_default_size().into()),
            n: Some(Self::get_default_n()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_payload_serializes_documented_fields() {
        let payload = Image::default().set_prompt("a white siamese cat");
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["model"], "dall-e-3");
        assert_eq!(value["prompt"], "a white siamese cat");
        assert_eq!(value["size"], "1024x1024");
        assert_eq!(value["n"], 1);
    }

    #[test]
    fn unset_prompt_is_omitted_from_the_wire() {
        let value = serde_json::to_value(Image::default()).unwrap();
        assert!(value.get("prompt").is_none());
    }

    #[test]
    fn image_size_renders_as_width_x_height() {
        let size = ImageSize::new(512, 512).resize(Some(256), None);
        assert_eq!(size.to_string(), "256x512");
    }
}
