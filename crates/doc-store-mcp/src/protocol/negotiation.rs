//! Initialize handshake tracking.
//!
//! `initialize` (request) moves the handshake to `Negotiated`; the client's
//! `initialized` notification then moves it to `Ready`. Only `Ready` admits
//! tool, resource, and prompt requests.

use crate::types::{
    Implementation, InitializeParams, InitializeResult, McpError, McpResult, MCP_VERSION,
};

/// Where the connection is in the initialize handshake.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HandshakeState {
    #[default]
    AwaitingInitialize,
    Negotiated,
    Ready,
}

/// Handshake progress plus the client's self-description.
#[derive(Debug, Clone, Default)]
pub struct Handshake {
    state: HandshakeState,
    client: Option<Implementation>,
}

impl Handshake {
    pub fn state(&self) -> HandshakeState {
        self.state
    }

    /// Client name and version, once `initialize` has been received.
    pub fn client(&self) -> Option<&Implementation> {
        self.client.as_ref()
    }

    /// Answer an `initialize` request.
    ///
    /// A version mismatch is tolerated: the server always answers with its own
    /// version and leaves the decision to the client.
    pub fn negotiate(&mut self, params: InitializeParams) -> McpResult<InitializeResult> {
        if self.state == HandshakeState::Ready {
            return Err(McpError::InvalidRequest(
                "Session already initialized".to_string(),
            ));
        }

        if params.protocol_version != MCP_VERSION {
            tracing::warn!(
                requested = %params.protocol_version,
                supported = MCP_VERSION,
                "Protocol version mismatch; answering with server version"
            );
        }

        tracing::info!(
            client = %params.client_info.name,
            version = %params.client_info.version,
            "Initialize received"
        );
        self.client = Some(params.client_info);
        self.state = HandshakeState::Negotiated;

        Ok(InitializeResult::default_result())
    }

    /// Record the client's `initialized` notification.
    pub fn confirm(&mut self) {
        match self.state {
            HandshakeState::Negotiated => {
                self.state = HandshakeState::Ready;
                tracing::info!("MCP handshake complete");
            }
            HandshakeState::AwaitingInitialize => {
                tracing::warn!("Ignoring 'initialized' before 'initialize'");
            }
            HandshakeState::Ready => {}
        }
    }

    /// Fail unless the handshake has completed.
    pub fn ensure_ready(&self) -> McpResult<()> {
        match self.state {
            HandshakeState::Ready => Ok(()),
            HandshakeState::AwaitingInitialize => Err(McpError::InvalidRequest(
                "Server not yet initialized. Send 'initialize' first.".to_string(),
            )),
            HandshakeState::Negotiated => Err(McpError::InvalidRequest(
                "Handshake incomplete. Send the 'initialized' notification first.".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> InitializeParams {
        serde_json::from_value(serde_json::json!({
            "protocolVersion": "2025-03-26",
            "capabilities": {},
            "clientInfo": {"name": "inspector", "version": "0.9"}
        }))
        .unwrap()
    }

    #[test]
    fn full_handshake() {
        let mut handshake = Handshake::default();
        assert!(handshake.ensure_ready().is_err());

        let result = handshake.negotiate(params()).unwrap();
        assert_eq!(result.protocol_version, MCP_VERSION);
        assert_eq!(handshake.state(), HandshakeState::Negotiated);
        assert_eq!(handshake.client().unwrap().name, "inspector");
        assert!(handshake.ensure_ready().is_err());

        handshake.confirm();
        assert_eq!(handshake.state(), HandshakeState::Ready);
        assert!(handshake.ensure_ready().is_ok());
    }

    #[test]
    fn confirm_before_initialize_is_ignored() {
        let mut handshake = Handshake::default();
        handshake.confirm();
        assert_eq!(handshake.state(), HandshakeState::AwaitingInitialize);
    }

    #[test]
    fn reinitialize_after_ready_is_rejected() {
        let mut handshake = Handshake::default();
        handshake.negotiate(params()).unwrap();
        handshake.confirm();
        assert!(matches!(
            handshake.negotiate(params()),
            Err(McpError::InvalidRequest(_))
        ));
    }
}
