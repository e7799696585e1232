use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::{error, info};

use super::config::StorefrontConfig;
use crate::actor_framework::ResourceActor;
use crate::catalog::Catalog;
use crate::clients::StorefrontClient;
use crate::deferred::{self, DisplayHandle};
use crate::domain::Session;

/// The main application system that wires the catalog to the session actor.
///
/// Responsible for starting the actor, handing out the client, and shutdown.
pub struct StorefrontSystem {
    pub client: StorefrontClient,
    config: StorefrontConfig,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl StorefrontSystem {
    /// Must be called inside a tokio runtime.
    pub fn new(config: StorefrontConfig, catalog: Catalog) -> Self {
        let session_id_counter = Arc::new(AtomicU64::new(1));
        let next_session_id = move || {
            let id = session_id_counter.fetch_add(1, Ordering::SeqCst);
            format!("session_{}", id)
        };

        let (session_actor, session_resource_client) =
            ResourceActor::<Session>::new(config.channel_capacity, next_session_id);
        let client = StorefrontClient::new(session_resource_client, Arc::new(catalog));
        let session_handle = tokio::spawn(session_actor.run());

        info!(channel_capacity = config.channel_capacity, "Storefront system started");

        Self {
            client,
            config,
            handles: vec![session_handle],
        }
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// Starts the delayed "show route" panel.
    pub fn route_display(&self) -> DisplayHandle {
        deferred::schedule("route", self.config.route_delay)
    }

    /// Starts the delayed store-map panel.
    pub fn map_display(&self) -> DisplayHandle {
        deferred::schedule("map", self.config.map_delay)
    }

    /// Drops the system's client and waits for the actor to drain. Clones of
    /// the client held elsewhere must be dropped first.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down storefront...");
        drop(self.client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Storefront shutdown complete.");
        Ok(())
    }
}
