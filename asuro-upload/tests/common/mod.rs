// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Scripted in-memory link shared by the integration tests.

#![allow(dead_code)]

use std::cell::Cell;
use std::collections::VecDeque;
use std::io;
use std::rc::Rc;

use asuro_upload::{Link, LinkError};

/// Link whose device side answers each send from a script.
///
/// The n-th send queues the n-th scripted reply; once the script is used
/// up every further send gets `fallback`.
pub struct FakeLink {
    replies: VecDeque<Vec<u8>>,
    fallback: Vec<u8>,
    rx: VecDeque<u8>,
    fail_at: Option<usize>,
    closed: Rc<Cell<bool>>,
    pub sent: Vec<Vec<u8>>,
}

impl FakeLink {
    /// A device that never answers.
    pub fn silent() -> Self {
        Self {
            replies: VecDeque::new(),
            fallback: Vec::new(),
            rx: VecDeque::new(),
            fail_at: None,
            closed: Rc::new(Cell::new(false)),
            sent: Vec::new(),
        }
    }

    pub fn with_replies(replies: &[&[u8]]) -> Self {
        let mut link = Self::silent();
        link.replies = replies.iter().map(|r| r.to_vec()).collect();
        link
    }

    /// Answer every unscripted send with `reply`.
    pub fn otherwise(mut self, reply: &[u8]) -> Self {
        self.fallback = reply.to_vec();
        self
    }

    /// Make the send with index `n` (0-based) fail.
    pub fn fail_on_send(mut self, n: usize) -> Self {
        self.fail_at = Some(n);
        self
    }

    /// Flag that turns true once the link is closed.
    pub fn closed_flag(&self) -> Rc<Cell<bool>> {
        Rc::clone(&self.closed)
    }
}

impl Link for FakeLink {
    fn send(&mut self, bytes: &[u8]) -> Result<(), LinkError> {
        if self.fail_at == Some(self.sent.len()) {
            return Err(LinkError::Io(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "transceiver unplugged",
            )));
        }
        self.sent.push(bytes.to_vec());

        let reply = self
            .replies
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone());
        self.rx.extend(reply);
        Ok(())
    }

    fn recv_byte(&mut self) -> Option<u8> {
        self.rx.pop_front()
    }

    fn close(self) {
        self.closed.set(true);
    }
}
