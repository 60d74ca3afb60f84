use std::{future::Future, pin::Pin, sync::Arc};

use riposte_core::error::Result;
use riposte_core::provider::{GenerateParameters, GenerateProvider};

use crate::{
    GeminiAdapter, api_v1beta::GenerateContentRequest, error::GeminiError, model_map::map_model,
};

impl GenerateProvider for GeminiAdapter {
    fn generate<'p>(
        &'p self,
        params: GenerateParameters,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'p>> {
        let client = Arc::clone(&self.client);

        Box::pin(async move {
            let model = map_model(&params.model);
            let request: GenerateContentRequest = params.into();

            let response = client.generate_content(&model, request).await?;

            match response.text() {
                Some(text) => Ok(text),
                None => Err(GeminiError::Format("response has no candidates".into()).into()),
            }
        })
    }
}
