//! End-to-end: Python source through the analyzer into the metrics engine.

use metricmap::analyzers::python::PythonAnalyzer;
use metricmap::metrics::{analyze, analyze_definitions};
use metricmap::{Analyzer, Error, NodeKind};
use indoc::indoc;
use pretty_assertions::assert_eq;
use std::path::Path;

fn parse(content: &str) -> metricmap::SyntaxNode {
    PythonAnalyzer::new()
        .parse(content, Path::new("sample.py"))
        .unwrap()
}

#[test]
fn flat_script_counts_statements() {
    let root = parse(indoc! {"
        a = 1
        b = 2
        print(a + b)
    "});

    let metrics = analyze(&root).unwrap();
    // module + three statements
    assert_eq!(metrics.cyclomatic_complexity, 4);
    assert_eq!(metrics.code_duplication, 0);
    assert_eq!(metrics.code_length, 0);
    assert_eq!(metrics.function_complexity, 0);
}

#[test]
fn branching_raises_complexity() {
    let root = parse(indoc! {"
        if limit > 0:
            count = limit
        else:
            count = 0
            limit = 1
    "});

    let metrics = analyze(&root).unwrap();
    // module 1 + if (1 + 2 else statements) + 3 statements
    assert_eq!(metrics.cyclomatic_complexity, 7);
}

#[test]
fn loops_raise_complexity() {
    let root = parse(indoc! {"
        for i in range(10):
            total += i
        while total > 0:
            total -= 1
    "});

    let metrics = analyze(&root).unwrap();
    // module 1 + for (1+1) + statement + while (1+1) + statement
    assert_eq!(metrics.cyclomatic_complexity, 7);
}

#[test]
fn definitions_report_their_own_metrics() {
    let source = indoc! {"
        def pick(options, fallback):
            for option in options:
                if option.ready:
                    return option
            return fallback


        class Chooser:
            def __init__(self, options):
                self.options = options
    "};

    let root = parse(source);
    let definitions = analyze_definitions(&root).unwrap();

    let names: Vec<&str> = definitions.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["pick", "Chooser", "__init__"]);

    let pick = &definitions[0];
    assert_eq!(pick.line, 1);
    // def at line 1, last body statement (return fallback) at line 5
    assert_eq!(pick.metrics.code_length, 5);
    // two parameters, no nested defs
    assert_eq!(pick.metrics.function_complexity, 2);

    let chooser = &definitions[1];
    assert_eq!(chooser.metrics.function_complexity, 0);
    // class at line 8, last body statement is the method whose body ends at 10;
    // the method node itself starts at 9
    assert_eq!(chooser.metrics.code_length, 2);

    let init = &definitions[2];
    assert_eq!(init.metrics.function_complexity, 2);
}

#[test]
fn nested_function_definitions_stack_their_complexity() {
    let root = parse(indoc! {"
        def make_adder(amount):
            def add(value):
                return value + amount
            return add
    "});

    let definitions = analyze_definitions(&root).unwrap();
    // outer: 1 parameter + max(inner = 1 parameter) = 2
    assert_eq!(definitions[0].metrics.function_complexity, 2);
    assert_eq!(definitions[1].metrics.function_complexity, 1);
}

#[test]
fn multi_statement_lines_show_up_as_duplication() {
    let root = parse(indoc! {"
        def crowded():
            a = 1; b = 2; c = 3
            return a + b + c
    "});

    let definitions = analyze_definitions(&root).unwrap();
    // three statements attributed to line 2
    assert_eq!(definitions[0].metrics.code_duplication, 2);

    // The whole-file invocation sees none of it: the root is not a function.
    assert_eq!(analyze(&root).unwrap().code_duplication, 0);
}

#[test]
fn unsupported_syntax_is_a_parse_error() {
    let err = PythonAnalyzer::new()
        .parse("def broken(:\n    pass\n", Path::new("broken.py"))
        .unwrap_err();
    assert!(matches!(err, Error::Parse { .. }));
}

#[test]
fn deeply_nested_source_hits_the_recursion_limit() {
    let mut source = String::new();
    for depth in 0..60 {
        source.push_str(&"    ".repeat(depth));
        source.push_str("if x:\n");
    }
    source.push_str(&"    ".repeat(60));
    source.push_str("pass\n");

    let err = PythonAnalyzer::with_recursion_limit(30)
        .parse(&source, Path::new("deep.py"))
        .unwrap_err();
    assert!(matches!(err, Error::RecursionLimit { limit: 30 }));
}

#[test]
fn module_root_is_a_module_node() {
    let root = parse("x = 1\n");
    assert_eq!(root.kind, NodeKind::Module);
    assert_eq!(root.line, 1);
}
