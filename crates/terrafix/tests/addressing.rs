//! Case table tests
//!
//! Each file in /tests/cases/ holds one case per line, columns separated by whitespace:
//! `<operation> <inputs>... <expected>`. A `-` input is the empty string, an `error` expectation
//! means the operation must fail with a malformed address.

use pretty_assertions::assert_eq;
use terrafix::{AddressPath, Error};

fn text(column: &str) -> &str {
    match column {
        "-" => "",
        column => column,
    }
}

fn reference(column: &str) -> AddressPath {
    match text(column) {
        "" => AddressPath::new(),
        column => column.parse().expect("reference must be a valid address"),
    }
}

fn render(result: Result<String, Error>) -> String {
    match result {
        Ok(rendered) => rendered,
        Err(err) => {
            assert!(err.is_malformed_address(), "unexpected error: {err}");
            "error".to_string()
        }
    }
}

fn run(columns: &[&str]) -> String {
    match columns {
        ["matches", r, pattern] => render(
            reference(r)
                .matches(text(pattern))
                .map(|matched| matched.to_string()),
        ),
        ["find", r, pattern] => render(reference(r).find_end(text(pattern)).map(|end| {
            end.map(|end| end.to_string())
                .unwrap_or_else(|| "none".to_string())
        })),
        ["replace", r, prefix, replacement] => render(
            reference(r)
                .replace_str(text(prefix), text(replacement))
                .map(|replaced| replaced.to_string()),
        ),
        ["format", address] => render(terrafix::parse(text(address)).map(|path| path.to_string())),
        _ => panic!("unknown case {columns:?}"),
    }
}

#[test]
fn cases() {
    insta::glob!("cases/*.txt", |path| {
        let contents = std::fs::read_to_string(path).unwrap();

        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let columns: Vec<&str> = line.split_whitespace().collect();
            let (expected, inputs) = columns.split_last().expect("case must not be empty");

            assert_eq!(run(inputs), *expected, "{}: {line}", path.display());
        }
    });
}

#[test]
fn documented_scenarios() {
    let a_0_b: AddressPath = "a.0.b".parse().unwrap();
    assert!(a_0_b.matches("a.b").unwrap());

    let a_0_b_1: AddressPath = "a[0].b.1".parse().unwrap();
    assert!(!a_0_b_1.matches("a.b").unwrap());
    assert!(a_0_b_1.matches("a.b.1").unwrap());

    let leading: AddressPath = "0.a.b.1".parse().unwrap();
    assert_eq!(leading.find_end("a.b").unwrap(), Some(2));

    assert_eq!(AddressPath::new().find_end("a.b").unwrap(), None);

    let abc: AddressPath = "a.b.c".parse().unwrap();
    let replaced = abc.replace(&"a.b".parse().unwrap(), &"z".parse().unwrap());
    insta::assert_snapshot!(replaced.to_string(), @"a.z.c");

    let unchanged = abc.replace(&"foo".parse().unwrap(), &"bar".parse().unwrap());
    assert_eq!(unchanged, abc);

    assert!(terrafix::parse("").unwrap_err().is_malformed_address());
}

#[test]
fn concurrent_use() {
    let reference: AddressPath = "res.name.block[0].old.1".parse().unwrap();
    let prefix: AddressPath = "res.name.block.old".parse().unwrap();
    let replacement: AddressPath = "nested.new".parse().unwrap();

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let replaced = reference.replace(&prefix, &replacement);
                assert_eq!(replaced.to_string(), "res.name.block[0].nested.new[1]");
            });
        }
    });
}
