use std::iter::Peekable;

use crate::ast::{AstNode, LongOption, PositionalArgument, ShortOption};
use crate::registry::FlagRegistry;
use crate::tokenizer::Token;

type TokenIter<'a> = Peekable<std::slice::Iter<'a, Token>>;

/// Shape of a token, given the names declared in the registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TokenKind {
    /// A literal `--`; everything after it is positional.
    Terminator,
    /// `--name` or `--name=value`.
    LongOption,
    /// `-abc`, `-n4`, `-n=4`.
    ShortCluster,
    /// Anything else, including `-`, `-5` and `-a-b`.
    Positional,
}

fn classify(raw: &str, registry: &FlagRegistry) -> TokenKind {
    if raw == "--" {
        TokenKind::Terminator
    } else if raw.len() > 2 && raw.starts_with("--") {
        TokenKind::LongOption
    } else if raw
        .strip_prefix('-')
        .is_some_and(|cluster| is_short_cluster(cluster, registry))
    {
        TokenKind::ShortCluster
    } else {
        TokenKind::Positional
    }
}

/// Returns whether every key of the cluster is a letter. Text after `=`, or after a
/// declared option, is a value and may hold anything.
fn is_short_cluster(cluster: &str, registry: &FlagRegistry) -> bool {
    let mut chars = cluster.chars();

    while let Some(key) = chars.next() {
        if !key.is_alphabetic() {
            return false;
        }

        let attached = chars.as_str();
        if attached.starts_with('=') || (registry.short_takes_value(key) && !attached.is_empty()) {
            return true;
        }
    }

    !cluster.is_empty()
}

/// Classifies tokens into AST nodes, using the registry to decide which options take a
/// value.
///
/// The output is fully determined by the tokens and the registry. The `--` terminator is
/// not emitted; words absorbed as option values don't get nodes of their own.
///
/// # Arguments
///
/// * `tokens` - The tokens to classify, as produced by [`crate::tokenize`].
/// * `registry` - The names declared by the argument parsers that will consume the nodes.
pub fn parse_tokens(tokens: &[Token], registry: &FlagRegistry) -> Vec<AstNode> {
    tracing::debug!(target: "parse", "Parsing {} token(s)...", tokens.len());

    let mut nodes = vec![];
    let mut tokens = tokens.iter().peekable();
    let mut after_terminator = false;

    while let Some(token) = tokens.next() {
        let kind = if after_terminator {
            TokenKind::Positional
        } else {
            classify(&token.raw, registry)
        };

        match kind {
            TokenKind::Terminator => after_terminator = true,
            TokenKind::LongOption => {
                nodes.push(parse_long_option(token, registry, &mut tokens));
            }
            TokenKind::ShortCluster => {
                parse_short_cluster(token, registry, &mut tokens, &mut nodes);
            }
            TokenKind::Positional => nodes.push(AstNode::Positional(PositionalArgument {
                raw: token.raw.clone(),
                index: token.index,
            })),
        }
    }

    for node in &nodes {
        tracing::debug!(target: "parse", "NODE: {node:?}");
    }

    nodes
}

/// Takes the next token as an option value, unless it looks like an option or terminator.
fn take_value(tokens: &mut TokenIter<'_>, registry: &FlagRegistry) -> Option<String> {
    tokens
        .next_if(|next| classify(&next.raw, registry) == TokenKind::Positional)
        .map(|next| next.raw.clone())
}

fn parse_long_option(
    token: &Token,
    registry: &FlagRegistry,
    tokens: &mut TokenIter<'_>,
) -> AstNode {
    let name = token.raw.strip_prefix("--").unwrap_or(&token.raw);

    let (key, value) = match name.split_once('=') {
        Some((key, value)) => (key.to_owned(), Some(value.to_owned())),
        None => {
            let value = if registry.long_takes_value(name) {
                take_value(tokens, registry)
            } else {
                None
            };
            (name.to_owned(), value)
        }
    };

    AstNode::LongOption(LongOption {
        raw: token.raw.clone(),
        index: token.index,
        key,
        value,
    })
}

fn parse_short_cluster(
    token: &Token,
    registry: &FlagRegistry,
    tokens: &mut TokenIter<'_>,
    nodes: &mut Vec<AstNode>,
) {
    let cluster = token.raw.strip_prefix('-').unwrap_or(&token.raw);
    let mut chars = cluster.chars();
    let mut offset = 0;

    while let Some(key) = chars.next() {
        let attached = chars.as_str();
        let index = if offset == 0 {
            token.index
        } else {
            token.index + 1 + offset
        };

        // An explicit `=` attaches the rest of the cluster, even to a flag.
        if let Some(value) = attached.strip_prefix('=') {
            nodes.push(short_option(key, attached, index, Some(value.to_owned())));
            return;
        }

        if registry.short_takes_value(key) {
            let value = if attached.is_empty() {
                take_value(tokens, registry)
            } else {
                Some(attached.to_owned())
            };
            nodes.push(short_option(key, attached, index, value));
            return;
        }

        // Unknown names are flags inside a cluster, but the last one takes the next word.
        if attached.is_empty() && !registry.is_short_flag(key) {
            nodes.push(short_option(key, "", index, take_value(tokens, registry)));
            return;
        }

        nodes.push(short_option(key, "", index, None));
        offset += 1;
    }
}

fn short_option(key: char, attached: &str, index: usize, value: Option<String>) -> AstNode {
    AstNode::ShortOption(ShortOption {
        raw: std::format!("-{key}{attached}"),
        index,
        key,
        value,
    })
}
