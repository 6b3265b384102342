use pyo3::exceptions::PyRuntimeError;
use pyo3::prelude::*;

use crate::error::TournamentError;
use crate::report::{render_json, render_text};
use crate::simulation::run_default;

fn to_py_err(err: TournamentError) -> PyErr {
    PyRuntimeError::new_err(err.to_string())
}

/// Run the weekly tournament and return the text report.
#[pyfunction]
#[pyo3(signature = (seed = None))]
fn run_tournament(seed: Option<u64>) -> PyResult<String> {
    let report = run_default(seed).map_err(to_py_err)?;
    Ok(render_text(&report))
}

/// Run the weekly tournament and return the JSON report.
#[pyfunction]
#[pyo3(signature = (seed = None))]
fn run_tournament_json(seed: Option<u64>) -> PyResult<String> {
    let report = run_default(seed).map_err(to_py_err)?;
    render_json(&report).map_err(to_py_err)
}

/// Python module definition
#[pymodule]
fn arcade_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(run_tournament, m)?)?;
    m.add_function(wrap_pyfunction!(run_tournament_json, m)?)?;

    m.add("PLAYER_COUNT", crate::constants::PLAYER_COUNT)?;
    m.add("AGE_BONUS_RATE", crate::constants::AGE_BONUS_RATE)?;
    m.add("DISQUALIFY_THRESHOLD", crate::constants::DISQUALIFY_THRESHOLD)?;

    Ok(())
}
