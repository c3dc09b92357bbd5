// SPDX-License-Identifier: MPL-2.0
//! Request ingress: the URI codec and the loopback transport.
//!
//! - [`codec`]: `notchdrop://notify?b64=…` encoding and decoding
//! - [`server`]: the agent's listener, forwarding requests to the engine
//! - [`client`]: the `notify` command's sending side

pub mod client;
pub mod codec;
pub mod server;

pub use client::deliver;
pub use codec::{decode_payload, decode_uri, encode_uri, IngressRequest};
pub use server::{dispatch, IngressServer};

/// Acknowledgement for an accepted request.
pub const REPLY_OK: &str = "ok";

/// Answer for a request that was dropped.
pub const REPLY_REJECTED: &str = "rejected";

/// Upper bound of a request or reply line.
const MAX_LINE_BYTES: u64 = 64 * 1024;
