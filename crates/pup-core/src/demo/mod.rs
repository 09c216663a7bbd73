//! Local response synthesis for demo mode
//!
//! Two flavors exist: the fallback replies the gateway serves when no
//! backend is reachable, and the scripted keyword responder that powers the
//! standalone demo deployment (`pup web --scripted`).

mod responder;

pub use responder::{
    DEMO_EXECUTION_TIME, DemoFlavor, FALLBACK_REPLIES, demo_chat_response, fallback_reply,
    scripted_reply,
};
