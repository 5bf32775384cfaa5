//! Integration tests for the xmu reader and the feff.inp collaborators

use chemtools_feff::{Calculation, FeffInput, Xmu, NO_FORMULA};
use rstest::{fixture, rstest};

#[fixture]
fn xmu() -> Xmu {
    Xmu::from_file("./data/xmu.dat", "./data/feff.inp").unwrap()
}

#[rstest]
fn input_file() {
    let input = FeffInput::from_file("./data/feff.inp").unwrap();
    assert_eq!(input.header.num_sites(), 4);
    assert_eq!(input.header.source.as_deref(), Some("CoO19128.cif"));
    assert_eq!(input.tags.len(), 9);
    assert_eq!(input.tags.get("LDOS"), Some("-30 15 0.1"));
    assert_eq!(input.potentials.indices(), vec![0, 1, 2]);
    assert_eq!(input.potentials.absorbing_atom().unwrap(), "Co");
}

#[rstest]
fn columns(xmu: Xmu) {
    assert_eq!(xmu.data.len(), 6);
    assert_eq!(xmu.energies()[0], 7708.686);
    assert_eq!(xmu.energies()[5], 7709.186);
    assert_eq!(xmu.relative_energies()[1], -3.214);
    assert_eq!(xmu.wavenumber()[2], -0.904);
    assert_eq!(xmu.mu()[3], 1.5286E-03);
    assert_eq!(xmu.mu0()[4], 1.7394E-03);
    assert_eq!(xmu.chi()[5], -2.0630E-04);
}

#[rstest]
fn run_metadata(xmu: Xmu) {
    assert_eq!(xmu.absorbing_atom, "Co");
    assert_eq!(xmu.calc(), Calculation::Xanes);
    assert_eq!(xmu.edge(), Some("K"));
    assert_eq!(xmu.source(), Some("CoO19128.cif"));
    assert_eq!(xmu.material_formula(), "Co2 O2");

    let text = xmu.to_string();
    assert!(text.starts_with("XANES spectrum\n"));
    assert!(text.contains("  edge           K\n"));
}

#[rstest]
fn exafs_without_formula(mut xmu: Xmu) {
    xmu.header = Default::default();
    xmu.parameters = chemtools_feff::Tags::parse("EXAFS 20\nEDGE L3\n");
    assert_eq!(xmu.calc(), Calculation::Exafs);
    assert_eq!(xmu.edge(), Some("L3"));
    assert_eq!(xmu.material_formula(), NO_FORMULA);
    assert_eq!(xmu.source(), None);
}

#[rstest]
fn json_round_trip(xmu: Xmu) {
    let json = xmu.to_json().unwrap();
    assert_eq!(Xmu::from_json(&json).unwrap(), xmu);
}
