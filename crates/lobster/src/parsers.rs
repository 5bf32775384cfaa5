//! nom parsers for the header and label lines of LOBSTER outputs

// chemtools modules
use chemtools_electronic::Orbital;
use chemtools_utils::parsers::{uint, vector_of_f64};

// nom parser combinators
use nom::bytes::complete::{is_not, tag};
use nom::character::complete::{alpha1, char, space0, space1};
use nom::combinator::{eof, map_res, opt, rest, verify};
use nom::number::complete::double;
use nom::sequence::{delimited, pair, preceded, tuple};
use nom::IResult;

/// One end of a bond label, e.g. `Bi1` or `Ga1[4p_x]`
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BondSite {
    pub species: String,
    /// One-based site number as written in the label
    pub number: usize,
    /// Principal quantum number and orbital for orbital-resolved labels
    pub orbital: Option<(u32, Orbital)>,
}

/// Bond label line of a COHPCAR file, e.g. `No.1:Bi1->Se7(2.88231)`
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BondLabel {
    pub sites: [BondSite; 2],
    pub length: f64,
}

impl BondLabel {
    /// Label shared by the total and orbital-resolved lines, e.g. `Bi1-Se7`
    pub fn label(&self) -> String {
        let [a, b] = &self.sites;
        format!("{}{}-{}{}", a.species, a.number, b.species, b.number)
    }

    /// Zero-based site indices
    pub fn site_indices(&self) -> (usize, usize) {
        let [a, b] = &self.sites;
        (a.number - 1, b.number - 1)
    }

    /// Orbital pair for orbital-resolved lines
    pub fn orbitals(&self) -> Option<[(u32, Orbital); 2]> {
        let [a, b] = &self.sites;
        Some([a.orbital?, b.orbital?])
    }

    /// Orbital pair label, e.g. `4s-4px`
    pub fn orbital_label(&self) -> Option<String> {
        let [(n1, o1), (n2, o2)] = self.orbitals()?;
        Some(format!("{n1}{}-{n2}{}", o1.name(), o2.name()))
    }
}

/// Orbital in square brackets, e.g. `[4p_x]` or `[4f_y(3x^2-y^2)]`
fn bracketed_orbital(i: &str) -> IResult<&str, (u32, Orbital)> {
    delimited(
        char('['),
        pair(
            nom::character::complete::u32,
            map_res(is_not("]"), Orbital::from_lobster_label),
        ),
        char(']'),
    )(i)
}

/// Species, one-based site number and optional orbital
fn bond_site(i: &str) -> IResult<&str, BondSite> {
    let (i, species) = alpha1(i)?;
    let (i, number) = verify(uint, |n: &usize| *n > 0)(i)?;
    let (i, orbital) = opt(bracketed_orbital)(i)?;
    Ok((
        i,
        BondSite {
            species: species.to_string(),
            number,
            orbital,
        },
    ))
}

/// Parse a COHPCAR bond label `No.<n>:<site>-><site>(<length>)`
pub(crate) fn bond_label(i: &str) -> IResult<&str, BondLabel> {
    let (i, _) = tuple((space0, tag("No."), uint, char(':')))(i)?;
    let (i, first) = bond_site(i)?;
    let (i, _) = tag("->")(i)?;
    let (i, second) = bond_site(i)?;
    let (i, length) = delimited(char('('), double, char(')'))(i)?;
    Ok((
        i,
        BondLabel {
            sites: [first, second],
            length,
        },
    ))
}

/// Parameters on the second line of a COHPCAR file
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CohpParameters {
    /// Number of bonds including the average
    pub n_entries: usize,
    pub n_spin: usize,
    pub n_energies: usize,
    pub emin: f64,
    pub emax: f64,
    pub efermi: f64,
}

/// Parse `<nbonds+1> <nspin> <nenergies> <emin> <emax> <efermi>`
pub(crate) fn cohp_parameters(i: &str) -> IResult<&str, CohpParameters> {
    let (i, (n_entries, n_spin, n_energies)) = tuple((uint, uint, uint))(i)?;
    let (i, values) = verify(vector_of_f64, |v: &[f64]| v.len() == 3)(i)?;
    Ok((
        i,
        CohpParameters {
            n_entries,
            n_spin,
            n_energies,
            emin: values[0],
            emax: values[1],
            efermi: values[2],
        },
    ))
}

/// Header line of a DOSCAR block
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DosBlockHeader {
    pub emax: f64,
    pub emin: f64,
    pub n_energies: usize,
    pub efermi: f64,
    /// Orbital labels after the `;`, empty for the total block
    pub orbitals: Vec<String>,
}

/// Parse `<emax> <emin> <ndos> <efermi> <weight>[; <orbitals>]`
pub(crate) fn dos_block_header(i: &str) -> IResult<&str, DosBlockHeader> {
    let (i, emax) = preceded(space0, double)(i)?;
    let (i, emin) = preceded(space1, double)(i)?;
    let (i, n_energies) = uint(i)?;
    let (i, efermi) = preceded(space1, double)(i)?;
    let (i, _weight) = preceded(space1, double)(i)?;
    let (i, orbitals) = opt(preceded(pair(space0, char(';')), rest))(i)?;
    Ok((
        i,
        DosBlockHeader {
            emax,
            emin,
            n_energies,
            efermi,
            orbitals: orbitals
                .map(|o| o.split_whitespace().map(String::from).collect())
                .unwrap_or_default(),
        },
    ))
}

/// Single bond of an ICOHPLIST file
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct IcohpRow<'a> {
    pub atom1: &'a str,
    pub atom2: &'a str,
    pub distance: f64,
    pub icohp: f64,
    pub number_of_bonds: usize,
}

/// Parse `<n> <atom1> <atom2> <distance> <icohp> <number of bonds>`
///
/// Nothing but whitespace may follow the number of bonds.
pub(crate) fn icohp_row(i: &str) -> IResult<&str, IcohpRow<'_>> {
    let (i, _) = uint(i)?;
    let (i, atom1) = preceded(space1, is_not(" \t"))(i)?;
    let (i, atom2) = preceded(space1, is_not(" \t"))(i)?;
    let (i, distance) = preceded(space1, double)(i)?;
    let (i, icohp) = preceded(space1, double)(i)?;
    let (i, number_of_bonds) = uint(i)?;
    let (i, _) = pair(space0, eof)(i)?;
    Ok((
        i,
        IcohpRow {
            atom1,
            atom2,
            distance,
            icohp,
            number_of_bonds,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_bond_label() {
        let bond = bond_label("No.1:Bi1->Se7(2.882308829886294)").unwrap().1;
        assert_eq!(bond.label(), "Bi1-Se7");
        assert_eq!(bond.site_indices(), (0, 6));
        assert_eq!(bond.length, 2.882308829886294);
        assert!(bond.orbitals().is_none());
        assert!(bond.orbital_label().is_none());
    }

    #[test]
    fn orbital_bond_label() {
        let bond = bond_label("No.12:Ga1[4s]->As2[4p_x](2.44990)").unwrap().1;
        assert_eq!(bond.label(), "Ga1-As2");
        assert_eq!(bond.site_indices(), (0, 1));
        assert_eq!(
            bond.orbitals(),
            Some([(4, Orbital::S), (4, Orbital::Px)])
        );
        assert_eq!(bond.orbital_label().unwrap(), "4s-4px");

        // orbital labels may contain brackets themselves
        let bond = bond_label("No.3:Ce1[4f_y(3x^2-y^2)]->O2[2s](2.3)").unwrap().1;
        assert_eq!(bond.orbital_label().unwrap(), "4f_3-2s");
        assert_eq!(bond.length, 2.3);
    }

    #[test]
    fn invalid_bond_labels() {
        assert!(bond_label("Average").is_err());
        assert!(bond_label("No.1:Bi0->Se7(2.88)").is_err());
        assert!(bond_label("No.1:Ga1[4q]->As2[4s](2.44)").is_err());
    }

    #[test]
    fn parameters() {
        let params = cohp_parameters("        12         1       241      -0.12468      11.92552       5.90043")
            .unwrap()
            .1;
        assert_eq!(params.n_entries, 12);
        assert_eq!(params.n_spin, 1);
        assert_eq!(params.n_energies, 241);
        assert_eq!(params.emin, -0.12468);
        assert_eq!(params.efermi, 5.90043);
        assert!(cohp_parameters("12 1 241 -0.12 11.9").is_err());
    }

    #[test]
    fn dos_headers() {
        let total = dos_block_header("     7.50000000    -11.25000000     6      0.00000000       1.00000000")
            .unwrap()
            .1;
        assert_eq!(total.n_energies, 6);
        assert_eq!(total.efermi, 0.0);
        assert!(total.orbitals.is_empty());

        let atom = dos_block_header("  7.5  -11.25  6  0.0  1.0; 2s 2p_y 2p_z 2p_x")
            .unwrap()
            .1;
        assert_eq!(atom.orbitals, vec!["2s", "2p_y", "2p_z", "2p_x"]);
    }

    #[test]
    fn icohp_rows() {
        let row = icohp_row("     1     Fe8     Fe7     2.83189     -0.10218      2")
            .unwrap()
            .1;
        assert_eq!(row.atom1, "Fe8");
        assert_eq!(row.atom2, "Fe7");
        assert_eq!(row.distance, 2.83189);
        assert_eq!(row.icohp, -0.10218);
        assert_eq!(row.number_of_bonds, 2);
        assert!(icohp_row("  COHP#  atomMU  atomNU  distance  ICOHP(eF)  for spin  2").is_err());
        assert!(icohp_row("     1     Fe8     Fe7     2.83189     -0.10218      2   ").is_ok());
        assert!(icohp_row("     1     Fe8     Fe7     2.83189     -0.10218      2 x0.5").is_err());
    }
}
