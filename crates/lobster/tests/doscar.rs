//! Integration tests for the DOSCAR reader

use chemtools_electronic::{Site, Spin};
use chemtools_lobster::{Doscar, Error};
use rstest::{fixture, rstest};

const ENERGIES: [f64; 6] = [-11.25, -7.5, -3.75, 0.0, 3.75, 7.5];

#[fixture]
fn spin() -> Doscar {
    Doscar::from_file("./data/DOSCAR.lobster.spin").unwrap()
}

#[fixture]
fn nonspin() -> Doscar {
    Doscar::from_file("./data/DOSCAR.lobster.nonspin").unwrap()
}

fn kf_sites() -> Vec<Site> {
    vec![
        Site::new("F", [0.0, 0.0, 0.0]),
        Site::new("K", [0.5, 0.5, 0.5]),
    ]
}

#[rstest]
fn total_spin(spin: Doscar) {
    assert!(spin.is_spin_polarized());
    assert_eq!(spin.efermi(), 0.0);
    assert_eq!(spin.energies(), &ENERGIES);
    assert_eq!(
        spin.tdensities()[&Spin::Up],
        vec![0.0, 0.79999, 0.0, 0.79999, 0.0, 0.02577]
    );
    assert_eq!(
        spin.tdensities()[&Spin::Down],
        vec![0.0, 0.79999, 0.0, 0.79999, 0.0, 0.02586]
    );
    assert_eq!(spin.itdensities[&Spin::Down][5], 6.1);
}

#[rstest]
fn total_nonspin(nonspin: Doscar) {
    assert!(!nonspin.is_spin_polarized());
    assert_eq!(nonspin.efermi(), 0.0);
    assert_eq!(nonspin.energies(), &ENERGIES);
    assert_eq!(nonspin.tdensities().len(), 1);
    assert_eq!(
        nonspin.tdensities()[&Spin::Up],
        vec![0.0, 1.6, 0.0, 1.6, 0.0, 0.02418]
    );
    assert_eq!(nonspin.itdensities[&Spin::Up][5], 12.1);
}

#[rstest]
#[case("2s", [0.0, 0.00159, 0.0, 0.00011, 0.0, 0.00069], [0.0, 0.00159, 0.0, 0.00011, 0.0, 0.00069])]
#[case("2p_y", [0.0, 0.00160, 0.0, 0.25801, 0.0, 0.00029], [0.0, 0.00161, 0.0, 0.25819, 0.0, 0.00029])]
#[case("2p_z", [0.0, 0.00161, 0.0, 0.25823, 0.0, 0.00029], [0.0, 0.00160, 0.0, 0.25795, 0.0, 0.00029])]
#[case("2p_x", [0.0, 0.00160, 0.0, 0.25805, 0.0, 0.00029], [0.0, 0.00161, 0.0, 0.25814, 0.0, 0.00029])]
fn pdos_spin(spin: Doscar, #[case] orbital: &str, #[case] up: [f64; 6], #[case] down: [f64; 6]) {
    assert_eq!(spin.n_atoms(), 2);
    assert_eq!(spin.pdos[0].len(), 4);
    assert_eq!(spin.pdos[0][orbital][&Spin::Up], up.to_vec());
    assert_eq!(spin.pdos[0][orbital][&Spin::Down], down.to_vec());
}

#[rstest]
#[case("2s", [0.0, 0.00320, 0.0, 0.00017, 0.0, 0.00060])]
#[case("2p_y", [0.0, 0.00322, 0.0, 0.51635, 0.0, 0.00037])]
#[case("2p_z", [0.0, 0.00322, 0.0, 0.51636, 0.0, 0.00037])]
#[case("2p_x", [0.0, 0.00322, 0.0, 0.51634, 0.0, 0.00037])]
fn pdos_nonspin(nonspin: Doscar, #[case] orbital: &str, #[case] values: [f64; 6]) {
    assert_eq!(nonspin.pdos[0][orbital][&Spin::Up], values.to_vec());
    assert!(!nonspin.pdos[0][orbital].contains_key(&Spin::Down));
}

#[rstest]
fn second_atom(spin: Doscar, nonspin: Doscar) {
    for doscar in [spin, nonspin] {
        let k = &doscar.pdos[1];
        assert_eq!(
            k.keys().collect::<Vec<_>>(),
            vec!["3p_x", "3p_y", "3p_z", "3s", "4s"]
        );
    }
}

#[rstest]
fn complete_dos(spin: Doscar) {
    let dos = spin.complete_dos(kf_sites()).unwrap();
    assert_eq!(dos.n_sites(), 2);
    assert_eq!(dos.efermi(), 0.0);
    assert_eq!(dos.energies(), &ENERGIES);
    assert_eq!(dos.pdos[0].site.species, "F");
    assert_eq!(dos.pdos[0].orbitals["2p_z"], spin.pdos[0]["2p_z"]);
    assert_eq!(dos.total, spin.tdos);

    let f = dos.site_dos(0).unwrap();
    let up = f.get_densities(Some(Spin::Up)).unwrap();
    assert!((up[3] - (0.00011 + 0.25801 + 0.25823 + 0.25805)).abs() < 1e-12);
}

#[rstest]
fn complete_dos_site_mismatch(nonspin: Doscar) {
    let mut sites = kf_sites();
    sites.pop();
    assert!(matches!(
        nonspin.complete_dos(sites),
        Err(Error::Electronic(
            chemtools_electronic::Error::SiteCountMismatch {
                expected: 2,
                found: 1
            }
        ))
    ));
}

#[rstest]
fn json_round_trip(spin: Doscar) {
    let json = spin.to_json().unwrap();
    assert_eq!(Doscar::from_json(&json).unwrap(), spin);
}
