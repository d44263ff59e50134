use std::sync::Arc;
use std::time::Duration;

use futures::future::{self, BoxFuture, FutureExt};
use futures::stream::{self, BoxStream, StreamExt};
use parking_lot::Mutex;

use super::{Recognition, SpeechInput, SpeechOutput, VoiceConfig};
use crate::error::SpeechError;

/// Replays a fixed script of recognition results.
#[derive(Clone, Default)]
pub struct ScriptedInput {
    script: Arc<Mutex<Vec<Result<Recognition, SpeechError>>>>,
    languages: Arc<Mutex<Vec<String>>>,
    delay: Option<Duration>,
    unsupported: bool,
}

impl ScriptedInput {
    pub fn new(script: Vec<Result<Recognition, SpeechError>>) -> Self {
        Self {
            script: Arc::new(Mutex::new(script)),
            ..Self::default()
        }
    }

    pub fn unsupported() -> Self {
        Self {
            unsupported: true,
            ..Self::default()
        }
    }

    /// Delays each scripted item, for exercising timeouts.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn set_script(&self, script: Vec<Result<Recognition, SpeechError>>) {
        *self.script.lock() = script;
    }

    /// Languages passed to `record`, in call order.
    pub fn languages(&self) -> Vec<String> {
        self.languages.lock().clone()
    }
}

impl SpeechInput for ScriptedInput {
    fn is_supported(&self) -> bool {
        !self.unsupported
    }

    fn record(&self, lang: &str) -> BoxStream<'static, Result<Recognition, SpeechError>> {
        self.languages.lock().push(lang.to_string());

        if self.unsupported {
            return stream::once(future::ready(Err(SpeechError::Unsupported))).boxed();
        }

        let items = self.script.lock().clone();
        match self.delay {
            Some(delay) => stream::iter(items)
                .then(move |item| async move {
                    tokio::time::sleep(delay).await;
                    item
                })
                .boxed(),
            None => stream::iter(items).boxed(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub voice: VoiceConfig,
}

/// Records every utterance instead of playing it.
#[derive(Clone, Default)]
pub struct RecordingOutput {
    spoken: Arc<Mutex<Vec<Utterance>>>,
    cancellations: Arc<Mutex<usize>>,
    fail_with: Option<SpeechError>,
}

impl RecordingOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(err: SpeechError) -> Self {
        Self {
            fail_with: Some(err),
            ..Self::default()
        }
    }

    pub fn spoken(&self) -> Vec<Utterance> {
        self.spoken.lock().clone()
    }

    pub fn cancellations(&self) -> usize {
        *self.cancellations.lock()
    }
}

impl SpeechOutput for RecordingOutput {
    fn is_supported(&self) -> bool {
        self.fail_with != Some(SpeechError::Unsupported)
    }

    fn speak(
        &self,
        text: &str,
        voice: &VoiceConfig,
    ) -> BoxFuture<'static, Result<(), SpeechError>> {
        if let Some(err) = &self.fail_with {
            return future::ready(Err(err.clone())).boxed();
        }
        self.spoken.lock().push(Utterance {
            text: text.to_string(),
            voice: voice.clone(),
        });
        future::ready(Ok(())).boxed()
    }

    fn cancel(&self) {
        *self.cancellations.lock() += 1;
    }
}
