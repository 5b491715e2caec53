use crate::model::{District, Division};

/// First division whose name matches `division_name`, ignoring case.
pub fn find_division<'a>(division_name: &str, divisions: &'a [Division]) -> Option<&'a Division> {
    let wanted = division_name.to_lowercase();
    divisions.iter().find(|d| d.name.to_lowercase() == wanted)
}

/// Districts of the named division, in source order.
///
/// An unknown division yields an empty list: the lookup id stays empty and
/// no district is expected to carry an empty `division_id`.
pub fn resolve<'a>(
    division_name: &str,
    divisions: &[Division],
    districts: &'a [District],
) -> Vec<&'a District> {
    let division_id = find_division(division_name, divisions).map(|d| d.id.as_str()).unwrap_or("");

    districts.iter().filter(|d| d.division_id == division_id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn division(id: &str, name: &str) -> Division {
        Division {
            id: id.into(),
            name: name.into(),
            bn_name: String::new(),
            url: String::new(),
        }
    }

    fn district(id: &str, division_id: &str, name: &str) -> District {
        District {
            id: id.into(),
            division_id: division_id.into(),
            name: name.into(),
            bn_name: String::new(),
            lat: "0".into(),
            lon: "0".into(),
            url: String::new(),
        }
    }

    fn fixture() -> (Vec<Division>, Vec<District>) {
        let divisions = vec![division("1", "Chattagram"), division("6", "Dhaka")];
        let districts = vec![
            district("1", "1", "Comilla"),
            district("40", "6", "Narsingdi"),
            district("2", "1", "Feni"),
            district("41", "6", "Gazipur"),
            district("47", "6", "Dhaka"),
        ];
        (divisions, districts)
    }

    fn names(found: &[&District]) -> Vec<String> {
        found.iter().map(|d| d.name.clone()).collect()
    }

    #[test]
    fn matching_is_case_insensitive() {
        let (divisions, districts) = fixture();

        let expected = names(&resolve("Dhaka", &divisions, &districts));
        assert_eq!(expected, ["Narsingdi", "Gazipur", "Dhaka"]);

        for variant in ["DHAKA", "dhaka", "dHaKa"] {
            assert_eq!(names(&resolve(variant, &divisions, &districts)), expected);
        }
    }

    #[test]
    fn unknown_division_yields_empty() {
        let (divisions, districts) = fixture();
        assert!(resolve("Atlantis", &divisions, &districts).is_empty());
    }

    #[test]
    fn substring_does_not_match() {
        let (divisions, districts) = fixture();
        assert!(resolve("Dhak", &divisions, &districts).is_empty());
        assert!(find_division("Dhaka Division", &divisions).is_none());
    }

    #[test]
    fn preserves_source_order() {
        let (divisions, districts) = fixture();
        let found = resolve("chattagram", &divisions, &districts);
        let ids: Vec<&str> = found.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["1", "2"]);
    }

    #[test]
    fn first_division_wins_on_duplicate_names() {
        let divisions = vec![division("1", "Dhaka"), division("2", "DHAKA")];
        let districts = vec![district("10", "2", "Second"), district("11", "1", "First")];

        assert_eq!(find_division("dhaka", &divisions).map(|d| d.id.as_str()), Some("1"));
        assert_eq!(names(&resolve("dhaka", &divisions, &districts)), ["First"]);
    }

    #[test]
    fn orphan_districts_are_never_returned() {
        let divisions = vec![division("6", "Dhaka")];
        let districts = vec![district("1", "99", "Orphan"), district("2", "6", "Gazipur")];

        assert_eq!(names(&resolve("dhaka", &divisions, &districts)), ["Gazipur"]);
    }
}
