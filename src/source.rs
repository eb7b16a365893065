use async_trait::async_trait;
use std::pin::Pin;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;
use tokio_stream::{Stream, StreamExt};
use tracing::{debug, warn};

use crate::config::LensStateConfig;
use crate::error::{LensStateError, Result};
use crate::state::LensState;

/// Snapshot stream type
pub type LensStateStream = Pin<Box<dyn Stream<Item = LensState> + Send>>;

/// Producer of lens state snapshots.
///
/// Implemented by the camera-communication layer. Implementations only hand
/// out fully populated snapshots, and only for cameras that report lens state.
/// Link failures surface as errors here, never inside a `LensState`.
///
/// # Example
///
/// ```rust
/// use lens_state::{LensState, LensStateChannel, LensStateSource};
/// use tokio_stream::StreamExt;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> lens_state::Result<()> {
/// let channel = LensStateChannel::new("X5");
/// let mut updates = channel.subscribe();
///
/// channel.publish(LensState::not_installed());
///
/// let state = updates.next().await.unwrap();
/// assert!(!state.is_lens_installed());
/// assert_eq!(channel.current().await?, state);
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait LensStateSource: Send + Sync {
    /// Camera model this source reports for
    fn camera(&self) -> &str;

    /// Latest snapshot
    async fn current(&self) -> Result<LensState>;

    /// Snapshots as they arrive, starting with the latest one if any
    fn subscribe(&self) -> LensStateStream;
}

/// In-process publisher for lens state snapshots.
///
/// Holds only the latest snapshot. Subscribers that fall behind skip
/// superseded snapshots. Dropping the channel ends every subscription.
#[derive(Debug)]
pub struct LensStateChannel {
    camera: String,
    tx: watch::Sender<Option<LensState>>,
}

impl LensStateChannel {
    pub fn new(camera: impl Into<String>) -> Self {
        let (tx, _rx) = watch::channel(None);
        Self {
            camera: camera.into(),
            tx,
        }
    }

    /// Create a channel for a camera listed in `config`
    pub fn for_camera(camera: impl Into<String>, config: &LensStateConfig) -> Result<Self> {
        let camera = camera.into();
        if !config.supports(&camera) {
            warn!(camera = %camera, "camera does not report lens state");
            return Err(LensStateError::UnsupportedCamera(camera));
        }
        Ok(Self::new(camera))
    }

    /// Replace the latest snapshot and notify subscribers
    pub fn publish(&self, state: LensState) {
        debug!(
            camera = %self.camera,
            installed = state.is_lens_installed(),
            focus_status = %state.focus_status(),
            "lens state published"
        );
        self.tx.send_replace(Some(state));
    }

    pub fn latest(&self) -> Option<LensState> {
        *self.tx.borrow()
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

#[async_trait]
impl LensStateSource for LensStateChannel {
    fn camera(&self) -> &str {
        &self.camera
    }

    async fn current(&self) -> Result<LensState> {
        self.latest()
            .ok_or_else(|| LensStateError::NoSnapshot(self.camera.clone()))
    }

    fn subscribe(&self) -> LensStateStream {
        debug!(camera = %self.camera, "lens state subscriber added");
        Box::pin(WatchStream::new(self.tx.subscribe()).filter_map(|state| state))
    }
}
