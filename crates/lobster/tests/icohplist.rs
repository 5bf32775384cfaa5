//! Integration tests for the ICOHPLIST and ICOOPLIST reader

use chemtools_electronic::Spin;
use chemtools_lobster::{read_icohplist, read_icooplist, Icohplist, IcohplistReader};
use rstest::rstest;

const BISE: [(&str, f64, f64, f64); 11] = [
    ("Bi1-Se7", 2.88231, -2.18042, 0.14245),
    ("Bi1-Se10", 3.10144, -1.14347, -0.04118),
    ("Bi2-Se8", 2.88231, -2.18042, 0.14245),
    ("Bi2-Se9", 3.10144, -1.14348, -0.04118),
    ("Bi3-Se10", 3.05001, -1.30006, -0.03516),
    ("Bi3-Se11", 2.91676, -1.96843, 0.10745),
    ("Bi4-Se9", 3.05001, -1.30006, -0.03516),
    ("Bi4-Se12", 2.91676, -1.96843, 0.10745),
    ("Bi5-Se12", 3.37522, -0.47531, -0.12395),
    ("Bi5-Bi6", 3.07294, -2.38796, 0.24714),
    ("Bi6-Se11", 3.37522, -0.47531, -0.12395),
];

#[rstest]
#[case("./data/ICOHPLIST.lobster.BiSe", false)] // case 1
#[case("./data/ICOOPLIST.lobster.BiSe", true)] // case 2
fn bise(#[case] path: &str, #[case] coops: bool) {
    let mut reader = IcohplistReader::new();
    reader.set_coops(coops);
    let list = reader.read_file(path).unwrap();

    assert_eq!(list.are_coops, coops);
    assert!(!list.is_spin_polarized);
    assert_eq!(list.len(), 11);

    for (label, length, icohp, icoop) in BISE {
        let bond = &list.icohplist[label];
        let expected = if coops { icoop } else { icohp };
        assert_eq!(bond.length, length);
        assert_eq!(bond.number_of_bonds, 3);
        assert_eq!(bond.icohp.len(), 1);
        assert_eq!(bond.icohp[&Spin::Up], expected);
    }
}

#[rstest]
#[case(false, [(-0.10218, -0.19701), (-0.28485, -0.58279)])] // case 1
#[case(true, [(-0.11389, -0.20828), (-0.04087, -0.05756)])] // case 2
fn fe_spin_polarised(#[case] coops: bool, #[case] values: [(f64, f64); 2]) {
    let list = match coops {
        true => read_icooplist("./data/ICOOPLIST.lobster").unwrap(),
        false => read_icohplist("./data/ICOHPLIST.lobster").unwrap(),
    };

    assert_eq!(list.are_coops, coops);
    assert!(list.is_spin_polarized);
    assert_eq!(list.len(), 2);

    let fe7 = &list.icohplist["Fe8-Fe7"];
    assert_eq!(fe7.length, 2.83189);
    assert_eq!(fe7.number_of_bonds, 2);
    assert_eq!(fe7.icohp[&Spin::Up], values[0].0);
    assert_eq!(fe7.icohp[&Spin::Down], values[0].1);

    let fe9 = &list.icohplist["Fe8-Fe9"];
    assert_eq!(fe9.length, 2.45249);
    assert_eq!(fe9.number_of_bonds, 1);
    assert_eq!(fe9.icohp[&Spin::Up], values[1].0);
    assert_eq!(fe9.icohp[&Spin::Down], values[1].1);
    assert!((fe9.total() - values[1].0 - values[1].1).abs() < 1e-12);
}

#[rstest]
fn json_round_trip() {
    let list = Icohplist::from_file("./data/ICOHPLIST.lobster").unwrap();
    let json = list.to_json().unwrap();
    assert_eq!(Icohplist::from_json(&json).unwrap(), list);
}

#[rstest]
fn default_names() {
    let mut reader = IcohplistReader::new();
    assert!(!reader.read_dir("./data").unwrap().are_coops);
    reader.set_coops(true);
    assert_eq!(reader.default_name(), "ICOOPLIST.lobster");
    assert!(reader.read_dir("./data").unwrap().are_coops);
}
