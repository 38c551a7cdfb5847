//! Tests for the individual argument combinators.

#![allow(clippy::panic_in_result_fn)]

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use argot_core::decoder::{DecodeError, DecodeResult, decode_fn, identity};
use argot_core::env::{EmptyEnvironment, Environment};
use argot_core::{
    ArgParser, Flag, FlagRegistry, MultiFlag, MultiOption, OptionArg, ParseContext, Positional,
    ParsingResult, RestPositionals, decoders, parse_args_with_environment,
};
use argot_parser::ast::AstNode;
use argot_parser::{parse_tokens, tokenize};
use pretty_assertions::assert_eq;

async fn parse_in<A: ArgParser>(
    parser: &A,
    line: &str,
    environment: Arc<dyn Environment>,
) -> Result<ParsingResult<A::Output, A::Partial>> {
    Ok(parse_args_with_environment(parser, line.split_whitespace(), environment).await?)
}

async fn parse<A: ArgParser>(
    parser: &A,
    line: &str,
) -> Result<ParsingResult<A::Output, A::Partial>> {
    parse_in(parser, line, Arc::new(EmptyEnvironment)).await
}

fn nodes(line: &str, registry: &FlagRegistry) -> Vec<AstNode> {
    parse_tokens(&tokenize(line.split_whitespace()), registry)
}

fn raws(nodes: &[AstNode]) -> Vec<String> {
    nodes.iter().map(|node| node.raw().to_owned()).collect()
}

fn env(name: &str, value: &str) -> Arc<dyn Environment> {
    Arc::new(HashMap::from([(name.to_owned(), value.to_owned())]))
}

fn messages<T, P>(result: &ParsingResult<T, P>) -> Vec<String> {
    match result {
        Ok(_) => vec![],
        Err(failure) => failure.errors.iter().map(|e| e.message.clone()).collect(),
    }
}

fn anchors<T, P>(result: &ParsingResult<T, P>) -> Vec<Vec<String>> {
    match result {
        Ok(_) => vec![],
        Err(failure) => failure
            .errors
            .iter()
            .map(|e| raws(&e.nodes))
            .collect(),
    }
}

fn verbose() -> Flag<argot_core::decoder::Identity<bool>> {
    Flag::new("verbose", identity::<bool>()).short('v')
}

#[tokio::test]
async fn flag_defaults_to_false() -> Result<()> {
    assert_eq!(parse(&verbose(), "").await?, Ok(false));
    assert_eq!(parse(&verbose(), "hello world").await?, Ok(false));
    Ok(())
}

#[tokio::test]
async fn flag_forms() -> Result<()> {
    assert_eq!(parse(&verbose(), "--verbose").await?, Ok(true));
    assert_eq!(parse(&verbose(), "-v").await?, Ok(true));
    assert_eq!(parse(&verbose(), "--verbose=false").await?, Ok(false));
    assert_eq!(parse(&verbose(), "-v=false").await?, Ok(false));
    assert_eq!(parse(&verbose(), "-v=true").await?, Ok(true));
    Ok(())
}

#[tokio::test]
async fn flag_does_not_take_the_next_word() -> Result<()> {
    let flag = verbose();
    let mut registry = FlagRegistry::new();
    flag.register(&mut registry)?;

    let mut context = ParseContext::new(nodes("--verbose hello", &registry));
    assert_eq!(flag.parse(&mut context).await, Ok(true));
    assert_eq!(raws(&context.unvisited_nodes()), ["hello"]);
    Ok(())
}

#[tokio::test]
async fn flag_rejects_repetition() -> Result<()> {
    let result = parse(&verbose(), "-v --verbose").await?;

    assert_eq!(
        messages(&result),
        ["Too many times provided. Expected 1, got: 2"]
    );
    assert_eq!(anchors(&result), [vec!["-v", "--verbose"]]);
    Ok(())
}

#[tokio::test]
async fn flag_rejects_non_boolean_values() -> Result<()> {
    let result = parse(&verbose(), "--verbose=maybe").await?;

    assert_eq!(
        messages(&result),
        ["expected value to be either \"true\" or \"false\". got: \"maybe\""]
    );
    assert_eq!(anchors(&result), [vec!["--verbose=maybe"]]);
    Ok(())
}

#[tokio::test]
async fn flag_falls_back_to_environment() -> Result<()> {
    let flag = verbose().env("VERBOSE");

    assert_eq!(parse_in(&flag, "", env("VERBOSE", "true")).await?, Ok(true));
    assert_eq!(parse_in(&flag, "-v=false", env("VERBOSE", "true")).await?, Ok(false));

    let result = parse_in(&flag, "", env("VERBOSE", "yes")).await?;
    assert_eq!(
        messages(&result),
        ["env[VERBOSE]: expected value to be either \"true\" or \"false\". got: \"yes\""]
    );
    assert_eq!(anchors(&result), [Vec::<String>::new()]);
    Ok(())
}

fn number() -> OptionArg<decoders::Number<u32>> {
    OptionArg::new("number", decoders::number::<u32>()).short('n')
}

#[tokio::test]
async fn option_forms_are_equivalent() -> Result<()> {
    for line in ["-n=2", "-n 2", "--number=2", "--number 2", "-n2"] {
        assert_eq!(parse(&number(), line).await?, Ok(2), "parsing '{line}'");
    }
    Ok(())
}

#[tokio::test]
async fn option_without_value() -> Result<()> {
    let result = parse(&number(), "--number").await?;
    assert_eq!(messages(&result), ["No value provided for --number"]);
    assert_eq!(anchors(&result), [vec!["--number"]]);

    // An option-looking word is not taken as a value.
    let result = parse(&number(), "-n --other").await?;
    assert_eq!(messages(&result), ["No value provided for --number"]);
    assert_eq!(anchors(&result), [vec!["-n"]]);
    Ok(())
}

#[tokio::test]
async fn option_missing() -> Result<()> {
    let result = parse(&number(), "").await?;
    assert_eq!(messages(&result), ["Missing required argument --number"]);
    assert_eq!(anchors(&result), [Vec::<String>::new()]);
    Ok(())
}

#[tokio::test]
async fn option_rejects_repetition() -> Result<()> {
    let result = parse(&number(), "-n 1 --number 2").await?;
    assert_eq!(
        messages(&result),
        ["Too many times provided. Expected 1, got: 2"]
    );
    Ok(())
}

#[tokio::test]
async fn option_decode_error_is_anchored() -> Result<()> {
    let result = parse(&number(), "--number abc").await?;
    assert_eq!(messages(&result), ["Not a number"]);
    assert_eq!(anchors(&result), [vec!["--number"]]);
    Ok(())
}

#[tokio::test]
async fn option_fallbacks() -> Result<()> {
    let with_default = number().default_value(10);
    assert_eq!(parse(&with_default, "").await?, Ok(10));
    assert_eq!(parse(&with_default, "-n 3").await?, Ok(3));

    let with_env = number().env("NUMBER").default_value(10);
    assert_eq!(parse_in(&with_env, "", env("NUMBER", "7")).await?, Ok(7));
    assert_eq!(parse_in(&with_env, "", env("OTHER", "7")).await?, Ok(10));

    let result = parse_in(&with_env, "", env("NUMBER", "seven")).await?;
    assert_eq!(messages(&result), ["env[NUMBER]: Not a number"]);
    Ok(())
}

#[test]
fn option_help_lists_fallbacks() {
    let option = number()
        .env("NUMBER")
        .default_value(10)
        .default_description("10")
        .value_name("n");

    let topics = option.help_topics();
    assert_eq!(topics.len(), 1);
    assert_eq!(topics[0].usage, "--number <n>, -n");
    assert_eq!(topics[0].defaults, ["env: NUMBER", "default: 10"]);
}

#[tokio::test]
async fn multiflag_counts_occurrences() -> Result<()> {
    let flag = MultiFlag::new("verbose", decoders::count()).short('v');

    assert_eq!(parse(&flag, "-vvvvv").await?, Ok(5));
    assert_eq!(parse(&flag, "").await?, Ok(0));
    assert_eq!(parse(&flag, "-v --verbose -v=false").await?, Ok(2));
    Ok(())
}

#[tokio::test]
async fn multiflag_reports_every_bad_value() -> Result<()> {
    let flag = MultiFlag::new("verbose", decoders::count()).short('v');

    let result = parse(&flag, "-v=1 -v --verbose=2").await?;
    assert_eq!(anchors(&result), [vec!["-v=1"], vec!["--verbose=2"]]);
    Ok(())
}

#[tokio::test]
async fn multiflag_decode_error_anchors_all_occurrences() -> Result<()> {
    let flag = MultiFlag::new(
        "verbose",
        decode_fn(|flags: Vec<bool>| -> DecodeResult<usize> {
            if flags.len() > 2 {
                Err(DecodeError::new("Too verbose"))
            } else {
                Ok(flags.len())
            }
        }),
    )
    .short('v');

    assert_eq!(parse(&flag, "-vv").await?, Ok(2));

    let result = parse(&flag, "-vvv").await?;
    assert_eq!(messages(&result), ["Too verbose"]);
    assert_eq!(anchors(&result), [vec!["-v", "-v", "-v"]]);
    Ok(())
}

#[tokio::test]
async fn multioption_collects_values_in_order() -> Result<()> {
    let option = MultiOption::new("number", decoders::each(decoders::number::<u32>())).short('n');

    assert_eq!(
        parse(&option, "--number=1 -n=2 --number 3 -n 4").await?,
        Ok(vec![1, 2, 3, 4])
    );
    assert_eq!(parse(&option, "").await?, Ok(vec![]));
    Ok(())
}

#[tokio::test]
async fn multioption_last_value_wins() -> Result<()> {
    let option = MultiOption::new("name", decoders::last(decoders::string()));

    assert_eq!(
        parse(&option, "--name a --name b").await?,
        Ok("b".to_owned())
    );
    Ok(())
}

#[tokio::test]
async fn multioption_decode_error_anchors_all_occurrences() -> Result<()> {
    let option = MultiOption::new("number", decoders::each(decoders::number::<u32>())).short('n');

    let result = parse(&option, "-n 1 -n x").await?;
    assert_eq!(messages(&result), ["Not a number"]);
    assert_eq!(anchors(&result), [vec!["-n", "-n"]]);
    Ok(())
}

#[tokio::test]
async fn positional() -> Result<()> {
    let name = Positional::new("name", decoders::string());
    assert_eq!(parse(&name, "Gal").await?, Ok("Gal".to_owned()));

    let result = parse(&name, "").await?;
    assert_eq!(messages(&result), ["No value provided for name"]);
    assert_eq!(anchors(&result), [Vec::<String>::new()]);

    let age = Positional::new("age", decoders::number::<u8>());
    let result = parse(&age, "old").await?;
    assert_eq!(messages(&result), ["Not a number"]);
    assert_eq!(anchors(&result), [vec!["old"]]);
    Ok(())
}

#[tokio::test]
async fn rest_positionals_report_every_failure() -> Result<()> {
    let numbers = RestPositionals::new("numbers", decoders::number::<u32>());

    let result = parse(&numbers, "10 20 --mamma mia hello 40").await?;
    assert_eq!(messages(&result), ["Not a number"]);
    assert_eq!(anchors(&result), [vec!["hello"]]);

    let result = parse(&numbers, "a 1 b").await?;
    assert_eq!(anchors(&result), [vec!["a"], vec!["b"]]);
    Ok(())
}

#[tokio::test]
async fn rest_positionals_skip_claimed_nodes() -> Result<()> {
    let numbers = RestPositionals::new("numbers", decoders::number::<u32>());
    let mut registry = FlagRegistry::new();
    numbers.register(&mut registry)?;

    let mut context = ParseContext::new(nodes("10 20 --mamma mia hello 40", &registry));
    let hello = context
        .unvisited()
        .find(|(_, node)| node.raw() == "hello")
        .map(|(id, _)| id);
    assert_eq!(hello, Some(3));
    context.visit(3);

    assert_eq!(numbers.parse(&mut context).await, Ok(vec![10, 20, 40]));

    assert_eq!(raws(&context.unvisited_nodes()), ["--mamma"]);
    Ok(())
}
