// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ordered pattern tables.
//!
//! A [`PatternSequence`] is the expected timeline of protocol events in a
//! decoded trace. It is built once at startup and never mutated; the scanner
//! only borrows it.

use crate::error::Error;
use crate::pattern::CompiledPattern;

/// Raw table entry: (group, regex source).
type Entry = (&'static str, &'static str);

const TCP: &str = "TCP connection establishment";
const CLIENT_HELLO: &str = "Client Hello";
const SERVER_HELLO: &str = "Server Hello";
const CLIENT_KEY_EXCHANGE: &str = "Client Key Exchange";
const SESSION_TICKET: &str = "New Session Ticket";
const APPLICATION_DATA: &str = "Application Data";

/// Expected tshark dissection markers for a TLS 1.2 handshake using
/// TLS_DHE_RSA_WITH_AES_128_GCM_SHA256 against server port 44330.
///
/// Duplicate entries are intentional: the cipher suite is echoed by both
/// hellos, and each direction sends its own Change Cipher Spec and
/// Encrypted Handshake Message.
const DHE_HANDSHAKE: &[Entry] = &[
    // Client -> server SYN, server -> client SYN+ACK.
    // #1 fails intermittently when the capture starts too late to see it.
    (TCP, r"Connection establish request \(SYN\): server port 44330"),
    (TCP, r"Connection establish acknowledge \(SYN\+ACK\): server port 44330"),
    (CLIENT_HELLO, r"TLSv1 Record Layer: Handshake Protocol: Client Hello"),
    (CLIENT_HELLO, r"Cipher Suite: TLS_DHE_RSA_WITH_AES_128_GCM_SHA256"),
    (SERVER_HELLO, r"TLSv1.2 Record Layer: Handshake Protocol: Server Hello"),
    (SERVER_HELLO, r"Cipher Suite: TLS_DHE_RSA_WITH_AES_128_GCM_SHA256"),
    (SERVER_HELLO, r"TLSv1.2 Record Layer: Handshake Protocol: Certificate"),
    (SERVER_HELLO, r"RelativeDistinguishedName item \(id-at-organizationName=Example\)"),
    (SERVER_HELLO, r"TLSv1.2 Record Layer: Handshake Protocol: Server Key Exchange"),
    (SERVER_HELLO, r"Diffie-Hellman Server Params"),
    (SERVER_HELLO, r"p Length: 256"),
    (SERVER_HELLO, r"p:"),
    (SERVER_HELLO, r"g Length: 256"),
    (SERVER_HELLO, r"g:"),
    (SERVER_HELLO, r"Pubkey Length:"),
    (SERVER_HELLO, r"Pubkey:"),
    (SERVER_HELLO, r"TLSv1.2 Record Layer: Handshake Protocol: Server Hello Done"),
    (CLIENT_KEY_EXCHANGE, r"TLSv1.2 Record Layer: Handshake Protocol: Client Key Exchange"),
    (CLIENT_KEY_EXCHANGE, r"Diffie-Hellman Client Params"),
    (CLIENT_KEY_EXCHANGE, r"Pubkey Length:"),
    (CLIENT_KEY_EXCHANGE, r"Pubkey:"),
    (CLIENT_KEY_EXCHANGE, r"TLSv1.2 Record Layer: Change Cipher Spec Protocol: Change Cipher Spec"),
    (CLIENT_KEY_EXCHANGE, r"TLSv1.2 Record Layer: Handshake Protocol: Encrypted Handshake Message"),
    (SESSION_TICKET, r"TLSv1.2 Record Layer: Handshake Protocol: New Session Ticket"),
    (SESSION_TICKET, r"TLSv1.2 Record Layer: Change Cipher Spec Protocol: Change Cipher Spec"),
    (SESSION_TICKET, r"TLSv1.2 Record Layer: Handshake Protocol: Encrypted Handshake Message"),
    (APPLICATION_DATA, r"TLSv1.2 Record Layer: Application Data Protocol: Application Data"),
];

/// One element of a pattern sequence.
#[derive(Debug, Clone)]
pub struct Pattern {
    /// Position in the sequence, used in diagnostics.
    pub index: usize,
    /// Semantic group this marker belongs to (e.g. "Server Hello").
    pub group: Option<String>,
    /// Source text as written in the table.
    pub source: String,
    matcher: CompiledPattern,
}

impl Pattern {
    /// True if this pattern occurs anywhere in `line`.
    pub fn is_match(&self, line: &str) -> bool {
        self.matcher.is_match(line)
    }
}

/// An ordered, immutable list of patterns.
#[derive(Debug, Clone, Default)]
pub struct PatternSequence {
    patterns: Vec<Pattern>,
}

impl PatternSequence {
    /// Compile `(group, source)` pairs in order.
    ///
    /// Fails on the first source that is not a valid regex.
    pub fn compile<I, G, S>(entries: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (Option<G>, S)>,
        G: Into<String>,
        S: AsRef<str>,
    {
        let mut patterns = Vec::new();
        for (index, (group, source)) in entries.into_iter().enumerate() {
            let source = source.as_ref();
            let matcher = CompiledPattern::compile(source)
                .map_err(|source| Error::InvalidPattern { index, source })?;
            patterns.push(Pattern {
                index,
                group: group.map(Into::into),
                source: source.to_string(),
                matcher,
            });
        }
        Ok(Self { patterns })
    }

    /// Compile ungrouped sources in order.
    pub fn from_sources<I, S>(sources: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::compile(sources.into_iter().map(|source| (None::<String>, source)))
    }

    /// The built-in TCP + TLS DHE handshake table.
    pub fn dhe_handshake() -> Result<Self, Error> {
        Self::compile(DHE_HANDSHAKE.iter().map(|&(group, source)| (Some(group), source)))
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Pattern> {
        self.patterns.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pattern> {
        self.patterns.iter()
    }
}

impl<'a> IntoIterator for &'a PatternSequence {
    type Item = &'a Pattern;
    type IntoIter = std::slice::Iter<'a, Pattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.patterns.iter()
    }
}

#[cfg(test)]
#[path = "sequence_tests.rs"]
mod tests;
