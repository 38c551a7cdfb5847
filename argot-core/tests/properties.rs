//! Properties that hold across parsers.

#![allow(clippy::panic_in_result_fn)]

use std::sync::Arc;

use anyhow::Result;
use argot_core::env::EmptyEnvironment;
use argot_core::{
    ArgParser, ArgParserExt, Command, FlagRegistry, MultiOption, OptionArg, ParseContext,
    Positional, RestPositionals, decoders, parse_args_with_environment,
};
use argot_parser::{parse_tokens, tokenize};
use pretty_assertions::assert_eq;

argot_core::command_args! {
    #[derive(Debug, PartialEq)]
    mod copy {
        source: String,
        target: String,
        rest: Vec<String>,
    }
}

fn copy_command() -> Command<copy::Parsers> {
    Command::builder()
        .name("copy")
        .args(copy::Parsers {
            source: Positional::new("source", decoders::string()).boxed(),
            target: Positional::new("target", decoders::string()).boxed(),
            rest: RestPositionals::new("rest", decoders::string()).boxed(),
        })
        .build()
}

#[tokio::test]
async fn positionals_are_claimed_in_declaration_order() -> Result<()> {
    let command = copy_command();
    let mut registry = FlagRegistry::new();
    command.register(&mut registry)?;

    let nodes = parse_tokens(&tokenize(["a", "-x", "b", "c", "d"]), &registry);
    let mut context = ParseContext::new(nodes);

    let args = command.parse(&mut context).await;
    assert_eq!(
        args,
        Ok(copy::Args {
            source: "a".to_owned(),
            target: "c".to_owned(),
            rest: vec!["d".to_owned()],
        })
    );

    // The unknown `-x` ends its cluster, so it took `b` as its value and is the only
    // node left.
    let leftover: Vec<_> = context
        .unvisited()
        .map(|(_, node)| node.raw().to_owned())
        .collect();
    assert_eq!(leftover, ["-x"]);
    assert_eq!(context.visited_count(), context.nodes().len() - 1);
    Ok(())
}

#[tokio::test]
async fn nodes_are_claimed_by_one_parser_only() -> Result<()> {
    argot_core::command_args! {
        #[derive(Debug, PartialEq)]
        mod twice {
            single: u32,
            all: Vec<u32>,
        }
    }

    // Both fields name the same option; the first field claims every occurrence.
    let command = Command::builder()
        .name("twice")
        .args(twice::Parsers {
            single: OptionArg::new("number", decoders::number::<u32>())
                .default_value(0)
                .boxed(),
            all: MultiOption::new("number", decoders::each(decoders::number::<u32>())).boxed(),
        })
        .build();

    let result = parse_args_with_environment(
        &command,
        ["--number", "1"],
        Arc::new(EmptyEnvironment),
    )
    .await?;

    assert_eq!(result, Ok(twice::Args { single: 1, all: vec![] }));
    Ok(())
}

#[tokio::test]
async fn parsing_is_deterministic() -> Result<()> {
    let command = copy_command();
    let line = ["x", "--unknown", "value", "y", "-abc", "--", "-z", "w"];

    let first = parse_args_with_environment(&command, line, Arc::new(EmptyEnvironment)).await?;
    let second = parse_args_with_environment(&command, line, Arc::new(EmptyEnvironment)).await?;

    assert_eq!(first, second);
    assert_eq!(
        first,
        Ok(copy::Args {
            source: "x".to_owned(),
            target: "y".to_owned(),
            rest: vec!["-z".to_owned(), "w".to_owned()],
        })
    );
    Ok(())
}
