// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Transport seam between the browser and the network

use super::request::Request;
use super::response::Response;
use crate::error::Result;

/// Something that can execute a [`Request`] and hand back a [`Response`].
///
/// [`HttpClient`](super::HttpClient) is the real implementation. The browser
/// only needs these two operations, so tests can plug in a scripted
/// transport instead of a network.
pub trait Transport {
    /// Execute the request, blocking until the response body is read
    fn send(&self, request: Request) -> Result<Response>;

    /// Number of cookies held by the session
    fn cookie_count(&self) -> usize {
        0
    }
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, request: Request) -> Result<Response> {
        (**self).send(request)
    }

    fn cookie_count(&self) -> usize {
        (**self).cookie_count()
    }
}
