//! Local popup channel.
//!
//! Unlike email and SMS there is no destination and no transport; the
//! "delivery" is displaying the content on the local console.

use crate::core::DeliveryStrategy;
use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

pub struct PopupStrategy;

#[async_trait]
impl DeliveryStrategy for PopupStrategy {
    fn name(&self) -> &str {
        "popup"
    }

    async fn deliver(&self, content: &str) -> Result<()> {
        debug!("displaying popup");
        println!("[popup]\n{content}");
        Ok(())
    }
}
