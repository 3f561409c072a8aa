pub mod utils {
    use nospace_driver::{CheckedFile, Driver, Surface, render};
    use std::path::{Path, PathBuf};

    pub fn case_path(kind: &str, file: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("cases").join(kind).join(file)
    }

    fn checked(path: &Path) -> CheckedFile {
        match Driver::default().check_file(path) {
            | Ok(checked) => checked,
            | Err(err) => {
                eprintln!("{}", err);
                panic!("Error loading {}", path.display());
            }
        }
    }

    /// The program checks cleanly and survives a trip through every surface
    /// that can hold it.
    pub fn wrapper_pass(path: impl AsRef<Path>) {
        let path = path.as_ref();
        let file = checked(path);
        if !file.is_ok() {
            eprintln!("{}", render::render(&file));
            panic!("Expected {} to check", path.display());
        }
        let driver = Driver::default();
        let source = file.surface.serialize(&file.ir);
        let mut targets = vec![Surface::Nossembly, Surface::Nospace];
        if !file.ir.operations.iter().any(|op| op.instruction.is_annotation()) {
            targets.push(Surface::Whitespace);
        }
        for target in targets {
            // names settle after one trip; from then on conversion is lossless
            let there = driver.convert(file.surface, &source, target).unwrap();
            let back = driver.convert(target, &there, file.surface).unwrap();
            let again = driver.convert(file.surface, &back, target).unwrap();
            assert_eq!(again, there, "round trip through {}", target);
            let rechecked = driver.check_source(target, &there).unwrap();
            assert!(
                rechecked.is_ok(),
                "{} fails to check once converted to {}",
                path.display(),
                target
            );
        }
    }

    /// The program is rejected, by the parser or by the checker.
    pub fn wrapper_fail(path: impl AsRef<Path>) {
        let path = path.as_ref();
        let file = checked(path);
        if file.is_ok() {
            panic!("Expected {} to be rejected", path.display());
        }
        println!("{}", render::render(&file));
    }
}

#[macro_export]
macro_rules! pass_case {
    ($name:ident, $file:expr) => {
        #[test]
        fn $name() {
            ::nospace_tests::utils::wrapper_pass(::nospace_tests::utils::case_path("pass", $file));
        }
    };
}

#[macro_export]
macro_rules! fail_case {
    ($name:ident, $file:expr) => {
        #[test]
        fn $name() {
            ::nospace_tests::utils::wrapper_fail(::nospace_tests::utils::case_path("fail", $file));
        }
    };
}
