use crate::*;
use nospace_statics::{TypeErrorKind, TypeWarningKind};
use nospace_syntax::ParseErrorKind;
use pretty_assertions::assert_eq;
use std::path::Path;
use unindent::unindent;

fn nossembly(source: &str) -> CheckedFile {
    Driver::default().check_source(Surface::Nossembly, &unindent(source)).unwrap()
}

#[test]
fn surface_from_extension() {
    assert_eq!(Surface::from_path(Path::new("a/b.nsa")).unwrap(), Surface::Nossembly);
    assert_eq!(Surface::from_path(Path::new("b.ns")).unwrap(), Surface::Nospace);
    assert_eq!(Surface::from_path(Path::new("b.ws")).unwrap(), Surface::Whitespace);
    assert!(matches!(Surface::from_path(Path::new("b.txt")), Err(BuildError::UnknownSurface(_))));
    assert_eq!("whitespace".parse::<Surface>().unwrap(), Surface::Whitespace);
    assert_eq!("nsa".parse::<Surface>().unwrap(), Surface::Nossembly);
    assert!("braille".parse::<Surface>().is_err());
}

#[test]
fn checks_a_clean_program() {
    let file = nossembly(
        "
        Push 1
        Cast Int
        WriteInt
        End
        ",
    );
    assert!(file.is_ok());
    assert_eq!(file.error_count(), 0);
}

#[test]
fn parse_errors_skip_the_checker() {
    let file = nossembly(
        "
        Pop
        Jump nowhere
        ",
    );
    assert!(!file.is_ok());
    assert!(file.report.is_none());
    assert_eq!(file.ir.parse_errors[0].kind, ParseErrorKind::Argument);
}

#[test]
fn type_errors_and_warnings() {
    let file = nossembly(
        "
        Push 1
        Cast Char
        WriteInt
        End
        Pop
        ",
    );
    let report = file.report.as_ref().unwrap();
    assert_eq!(report.errors.iter().map(|e| e.kind).collect::<Vec<_>>(), vec![TypeErrorKind::Mismatch]);
    assert_eq!(
        report.warnings.iter().map(|w| w.kind).collect::<Vec<_>>(),
        vec![TypeWarningKind::Unreachable]
    );
    assert_eq!((file.error_count(), file.warning_count()), (1, 1));
}

#[test]
fn strict_from_configuration() {
    let driver = Driver::new(Conf { strict: true, ..Conf::default() });
    let file = driver.check_source(Surface::Nossembly, "Push 1\nPop\n").unwrap();
    let report = file.report.unwrap();
    assert_eq!(report.errors[0].kind, TypeErrorKind::StrictModeViolation);
}

#[test]
fn pass_ceiling_from_configuration() {
    let driver = Driver::new(Conf { max_passes: 0, ..Conf::default() });
    let result = driver.check_source(Surface::Nossembly, "Push 1\nPop\n");
    assert!(matches!(result, Err(BuildError::CheckError(_))));
}

#[test]
fn missing_file() {
    let result = Driver::default().check_file("no/such/program.nsa");
    assert!(matches!(result, Err(BuildError::SrcFileNotFound(_))));
}

#[test]
fn convert_through_nospace() {
    let driver = Driver::default();
    let source = unindent(
        "
        Push 1
        Cast Int
        Label main
         Jump main
        ",
    );
    let invisible = driver.convert(Surface::Nossembly, &source, Surface::Nospace).unwrap();
    assert!(!invisible.is_empty());
    assert!(!invisible.chars().any(|c| c.is_ascii_whitespace()));
    let back = driver.convert(Surface::Nospace, &invisible, Surface::Nossembly).unwrap();
    assert_eq!(back, "Push 1\nCast Int\n\nLabel A\n Jump A\n");
}

#[test]
fn convert_keeps_extreme_numbers() {
    let driver = Driver::default();
    let source = "Push -9223372036854775808\nPush 9223372036854775807\n";
    let invisible = driver.convert(Surface::Nossembly, source, Surface::Nospace).unwrap();
    let back = driver.convert(Surface::Nospace, &invisible, Surface::Nossembly).unwrap();
    assert_eq!(back, source);
}

#[test]
fn convert_to_whitespace_drops_annotations() {
    let driver = Driver::default();
    let spaced = driver.convert(Surface::Nossembly, "Push 1\nCast Int\nPop\n", Surface::Whitespace).unwrap();
    let back = driver.convert(Surface::Whitespace, &spaced, Surface::Nossembly).unwrap();
    assert_eq!(back, "Push 1\nPop\n");
}

#[test]
fn convert_refuses_broken_programs() {
    let result = Driver::default().convert(Surface::Nossembly, "Bogus\n", Surface::Nospace);
    let Err(BuildError::ParseErrors(errors)) = result else { panic!("expected parse errors") };
    assert_eq!(errors[0].kind, ParseErrorKind::UnknownInstruction);
}

#[test]
fn renders_plain_diagnostics() {
    colored::control::set_override(false);
    let file = nossembly("Pop\n");
    let text = render::render(&file);
    assert!(text.contains("error[underflow]: Cannot perform pop as this would result in a stack underflow."));
    assert!(text.contains("--> 1:0"));
    assert!(text.contains("1 | Pop"));
    assert!(text.ends_with("check <source> ... failed (1 errors, 0 warnings)\n"));
}
