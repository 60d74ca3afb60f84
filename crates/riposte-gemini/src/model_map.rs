use std::borrow::Cow;

use riposte_core::model::{GeminiModel, Model};

pub const GEMINI_25_FLASH: &str = "gemini-2.5-flash";
pub const GEMINI_FLASH_LITE_LATEST: &str = "gemini-flash-lite-latest";

pub(crate) fn map_model(model: &Model) -> Cow<'static, str> {
    match model {
        Model::Custom(custom) => Cow::Borrowed(*custom),
        Model::Gemini(GeminiModel::Flash25) => GEMINI_25_FLASH.into(),
        Model::Gemini(GeminiModel::FlashLiteLatest) => GEMINI_FLASH_LITE_LATEST.into(),
    }
}
