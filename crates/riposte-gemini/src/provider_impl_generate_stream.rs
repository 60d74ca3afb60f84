use std::pin::Pin;
use std::sync::Arc;

use futures_core::stream::Stream;
use riposte_core::error::{Result, RiposteError};
use riposte_core::provider::{GenerateParameters, StreamingGenerateProvider};

use crate::api_v1beta::GenerateContentRequest;
use crate::model_map::map_model;
use crate::GeminiAdapter;

impl StreamingGenerateProvider for GeminiAdapter {
    type Chunks<'s>
        = Pin<Box<dyn Stream<Item = Result<String>> + Send + 's>>
    where
        Self: 's;

    fn generate_stream(&self, params: GenerateParameters) -> Self::Chunks<'_> {
        let client = Arc::clone(&self.client);

        Box::pin(async_stream::try_stream! {
            use futures_util::StreamExt;

            let model = map_model(&params.model);
            let request: GenerateContentRequest = params.into();

            let stream = client.generate_content_stream(&model, request);
            futures_util::pin_mut!(stream);

            while let Some(chunk) = stream.next().await {
                let chunk = chunk.map_err(RiposteError::from)?;
                if let Some(text) = chunk.text()
                    && !text.is_empty() {
                        yield text;
                    }
            }
        })
    }
}
