/*!
 * Command Parsing Tests
 * Normalization and parsing of command lines
 */

use memsim::shell::{normalize_line, Command};
use memsim::ShellError;
use pretty_assertions::assert_eq;
use std::path::PathBuf;

fn parse(raw: &str) -> Result<Command, ShellError> {
    Command::parse(&normalize_line(raw))
}

#[test]
fn test_allocate() {
    assert_eq!(
        parse("a p 20 f").unwrap(),
        Command::Allocate {
            owner: 'P',
            size: 20,
            strategy: 'F',
        }
    );
}

#[test]
fn test_long_command_words() {
    assert_eq!(
        parse("ALLOCATE Q 5 BEST").unwrap(),
        Command::Allocate {
            owner: 'Q',
            size: 5,
            strategy: 'B',
        }
    );
    assert_eq!(parse("free q").unwrap(), Command::Free { owner: 'Q' });
    assert_eq!(parse("show").unwrap(), Command::Show);
    assert_eq!(parse("compact").unwrap(), Command::Compact);
    assert_eq!(parse("exit").unwrap(), Command::Exit);
}

#[test]
fn test_unknown_strategy_reaches_allocator() {
    // Strategy validation belongs to the allocator, not the parser
    assert_eq!(
        parse("A P 5 x").unwrap(),
        Command::Allocate {
            owner: 'P',
            size: 5,
            strategy: 'X',
        }
    );
}

#[test]
fn test_invalid_allocations() {
    for line in ["A", "A P", "A P 20", "A P 0 F", "A P -3 F", "A P ten F"] {
        let result = parse(line);
        assert!(
            matches!(result, Err(ShellError::InvalidCommand(_))),
            "{line:?} should be invalid, got {result:?}"
        );
    }
}

#[test]
fn test_read_keeps_filename_case() {
    assert_eq!(
        parse("r Scripts/Batch.TXT").unwrap(),
        Command::Read {
            path: PathBuf::from("Scripts/Batch.TXT"),
        }
    );
    assert!(matches!(parse("R"), Err(ShellError::InvalidCommand(_))));
}

#[test]
fn test_free_requires_owner() {
    assert!(matches!(parse("F"), Err(ShellError::InvalidCommand(_))));
}

#[test]
fn test_blank_and_unknown_lines() {
    assert_eq!(parse("").unwrap(), Command::Empty);
    assert_eq!(parse("   ").unwrap(), Command::Empty);
    assert!(matches!(parse("Q"), Err(ShellError::InvalidCommand(ref l)) if l == "Q"));
}

#[test]
fn test_from_str() {
    let command: Command = "S".parse().unwrap();
    assert_eq!(command, Command::Show);
}
