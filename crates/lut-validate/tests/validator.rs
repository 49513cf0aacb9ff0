use lut_model::{Field, LutError, TableEntry};
use lut_validate::EntryValidator;
use proptest::prelude::*;

fn run(domain: Option<usize>, indices: &[i64]) -> Result<Vec<TableEntry>, LutError> {
    let mut validator = EntryValidator::new(domain);
    for (line, &index) in indices.iter().enumerate() {
        validator.observe(TableEntry::new(index, vec![Field::Int(0)]), line + 1)?;
    }
    validator.finish()
}

proptest! {
    #[test]
    fn any_permutation_of_the_domain_is_complete(
        indices in Just((0..64i64).collect::<Vec<_>>()).prop_shuffle()
    ) {
        let entries = run(Some(64), &indices).unwrap();
        prop_assert_eq!(entries.len(), 64);
    }

    #[test]
    fn dropping_one_index_reports_it(
        indices in Just((0..64i64).collect::<Vec<_>>()).prop_shuffle(),
        drop in 0..64usize,
    ) {
        let removed = indices[drop];
        let mut remaining = indices.clone();
        remaining.remove(drop);
        let err = run(Some(64), &remaining).unwrap_err();
        prop_assert!(matches!(err, LutError::MissingIndex { index } if index == removed), "unexpected error: {:?}", err);
    }

    #[test]
    fn repeating_an_index_cites_both_lines(
        indices in Just((0..32i64).collect::<Vec<_>>()).prop_shuffle(),
        pick in 0..32usize,
    ) {
        let mut doubled = indices.clone();
        doubled.push(indices[pick]);
        let err = run(None, &doubled).unwrap_err();
        match err {
            LutError::DuplicateIndex { index, line, first_line } => {
                prop_assert_eq!(index, indices[pick]);
                prop_assert_eq!(line, 33);
                prop_assert_eq!(first_line, pick + 1);
            }
            other => prop_assert!(false, "unexpected error: {}", other),
        }
    }
}
