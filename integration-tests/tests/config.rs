//! Solver configuration loaded from TOML.

use serde::Deserialize;
use stepwise_solvers::{
    equation::newton,
    ode::crank_nicolson,
    quadrature::Rule,
    relaxation,
};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Settings {
    newton: newton::Config,
    implicit: crank_nicolson::Config,
    relaxation: relaxation::Config,
    rule: Rule,
}

#[test]
fn partial_documents_keep_defaults() {
    let settings: Settings = toml::from_str(
        r#"
        rule = "left"

        [newton]
        residual_tol = 1e-8

        [implicit]
        linearize = false

        [relaxation]
        max_iters = 50
        "#,
    )
    .unwrap();

    assert_eq!(settings.newton.residual_tol, 1e-8);
    assert_eq!(settings.newton.max_iters, newton::Config::default().max_iters);

    assert!(!settings.implicit.linearize);
    assert_eq!(settings.implicit.tol, 1e-10);
    assert_eq!(settings.implicit.max_iters, 1000);

    assert_eq!(settings.relaxation.max_iters, 50);
    assert_eq!(settings.relaxation.tol, 1e-2);

    assert_eq!(settings.rule, Rule::Left);
}

#[test]
fn empty_document_is_all_defaults() {
    let settings: Settings = toml::from_str("").unwrap();

    assert_eq!(settings.newton, newton::Config::default());
    assert_eq!(settings.implicit, crank_nicolson::Config::default());
    assert_eq!(settings.relaxation, relaxation::Config::default());
    assert_eq!(settings.rule, Rule::Middle);
}

#[test]
fn loaded_values_are_still_validated() {
    let settings: Settings = toml::from_str(
        r#"
        [relaxation]
        tol = -1.0
        "#,
    )
    .unwrap();

    let grid = ndarray::Array2::zeros((3, 3));
    let result = relaxation::jacobi::solve_unobserved(&grid, &grid, &settings.relaxation);

    assert!(matches!(
        result,
        Err(relaxation::Error::InvalidConfig(relaxation::ConfigError::Tol))
    ));
}

#[test]
fn unknown_rule_is_rejected() {
    let result: Result<Settings, _> = toml::from_str(r#"rule = "simpson""#);
    assert!(result.is_err());
}
