//! nom parsers for the line types found in `feff.inp`

// crate modules
use crate::input::Potential;

// chemtools modules
use chemtools_electronic::Site;
use chemtools_utils::parsers::{uint, vector_of_f64};

// nom parser combinators
use nom::bytes::complete::{is_not, tag_no_case, take_while};
use nom::character::complete::{alpha1, char, satisfy, space0, space1};
use nom::combinator::{recognize, rest};
use nom::sequence::{pair, preceded, tuple};
use nom::IResult;

/// Checks for a `TITLE` line of the header block
pub(crate) fn is_title(i: &str) -> bool {
    title_line(i).is_ok()
}

/// Checks for a `*` comment line
pub(crate) fn is_comment(i: &str) -> bool {
    i.trim_start().starts_with('*')
}

/// Split a `TITLE key: value` line into its key and value
///
/// Titles without a `:` are returned whole as the key with an empty value.
pub(crate) fn title_line(i: &str) -> IResult<&str, (String, String)> {
    let (i, _) = tuple((space0, tag_no_case("TITLE"), space1))(i)?;
    let (i, text) = rest(i)?;
    let (key, value) = text.split_once(':').unwrap_or((text, ""));
    Ok((
        i,
        (key.trim().to_lowercase(), value.trim().to_string()),
    ))
}

/// Parse a commented site line `* <n> <symbol> <x> <y> <z>`
pub(crate) fn site_line(i: &str) -> IResult<&str, Site> {
    let (i, _) = preceded(space0, char('*'))(i)?;
    let (i, _) = uint(i)?;
    let (i, species) = preceded(space1, alpha1)(i)?;
    let (i, values) = vector_of_f64(i)?;

    match values.as_slice() {
        [x, y, z] => Ok((i, Site::new(species, [*x, *y, *z]))),
        _ => Err(nom::Err::Error(nom::error::Error::new(
            i,
            nom::error::ErrorKind::Count,
        ))),
    }
}

/// Name of a card, i.e. a keyword starting with an uppercase letter
pub(crate) fn card_name(i: &str) -> IResult<&str, &str> {
    preceded(
        space0,
        recognize(pair(
            satisfy(|c| c.is_ascii_uppercase()),
            take_while(|c: char| c.is_ascii_alphanumeric() || c == '_'),
        )),
    )(i)
}

/// Parse a card line into its name and the remainder of the line
pub(crate) fn card_line(i: &str) -> IResult<&str, (&str, String)> {
    let (i, name) = card_name(i)?;
    // the name must be a whole word
    if !(i.is_empty() || i.starts_with(char::is_whitespace)) {
        return Err(nom::Err::Error(nom::error::Error::new(
            i,
            nom::error::ErrorKind::Alpha,
        )));
    }
    let value = i.split_whitespace().collect::<Vec<&str>>().join(" ");
    Ok(("", (name, value)))
}

/// Parse a row of the POTENTIALS card `ipot Z tag ...`
pub(crate) fn potential_row(i: &str) -> IResult<&str, Potential> {
    let (i, ipot) = uint(i)?;
    let (i, z) = uint(i)?;
    let (i, tag) = preceded(space1, is_not(" \t"))(i)?;
    Ok((
        i,
        Potential {
            ipot,
            z: z as u32,
            tag: tag.to_string(),
        },
    ))
}

/// Checks for the keyword opening the POTENTIALS card
pub(crate) fn is_potentials_card(i: &str) -> bool {
    preceded(space0, tag_no_case::<&str, &str, ()>("POTENTIALS"))(i)
        .map(|(rest, _)| rest.trim().is_empty())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_lines() {
        assert_eq!(
            title_line("TITLE Source:  CoO19128.cif").unwrap().1,
            ("source".to_string(), "CoO19128.cif".to_string())
        );
        assert_eq!(
            title_line("TITLE space group: (P6_3mc), space number:  (186)")
                .unwrap()
                .1
                .1,
            "(P6_3mc), space number:  (186)"
        );
        assert!(is_title("TITLE sites: 4"));
        assert!(!is_title("* 1 Co 0.3 0.6 0.5"));
    }

    #[test]
    fn site_lines() {
        let site = site_line("* 3 O     0.333333     0.666667     0.121324")
            .unwrap()
            .1;
        assert_eq!(site.species, "O");
        assert_eq!(site.coords, [0.333333, 0.666667, 0.121324]);

        assert!(site_line("* This FEFF.inp file generated by pymatgen").is_err());
        assert!(site_line("* 1 Co 0.5 0.5").is_err());
    }

    #[test]
    fn card_lines() {
        assert_eq!(card_line("EDGE      K"), Ok(("", ("EDGE", "K".to_string()))));
        assert_eq!(
            card_line("XANES     4 0.04   0.1"),
            Ok(("", ("XANES", "4 0.04 0.1".to_string())))
        );
        assert_eq!(card_line("END"), Ok(("", ("END", String::new()))));
        assert!(card_line("   0   27  Co").is_err());
        assert!(card_line("*    ipot   Z  tag").is_err());
        assert!(card_line("Co:x").is_err());
    }

    #[test]
    fn potential_rows() {
        let potential = potential_row("   2    8  O  -1  -1  2  0").unwrap().1;
        assert_eq!(potential.ipot, 2);
        assert_eq!(potential.z, 8);
        assert_eq!(potential.tag, "O");
        assert!(potential_row("ATOMS").is_err());
        assert!(is_potentials_card("POTENTIALS"));
        assert!(!is_potentials_card("POTENTIALS_EXTRA"));
    }
}
