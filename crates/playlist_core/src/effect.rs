use crate::{RenderGeneration, RowRecord, Session};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send the user to the authorization endpoint.
    BeginAuthorization,
    /// Forget the callback URL the token was read from.
    ClearCallback,
    /// Fetch enrichment for `rows` one by one and report back per row.
    StartRenderPass {
        generation: RenderGeneration,
        rows: Vec<RowRecord>,
        session: Session,
    },
    /// Stop whichever render pass is in flight.
    CancelRenderPass,
    /// Show a message to the user.
    Notify { message: String },
}
