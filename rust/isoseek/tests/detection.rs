use isoseek::serde::peaks_io::{
    read_peptide_records,
    read_protein_descriptions,
    write_candidates_csv,
};
use isoseek::{
    CandidateTolerance,
    annotate_descriptions,
    find_candidates,
    slice_rt_range,
};
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    PathBuf::from(manifest_dir)
        .join("tests")
        .join("peaks_io_files")
        .join(name)
}

#[test]
fn test_detection_over_fixture_export() {
    let records = read_peptide_records(fixture("sample_export.csv")).unwrap();
    let candidates = find_candidates(&records, &CandidateTolerance::default());

    // AAGK spreads 5 min / ~10% mobility; DDEK spreads 1.5 min / ~27%.
    // BBCK fails the RT threshold and CCDK is a singleton.
    let peptides: Vec<&str> = candidates.iter().map(|c| c.peptide.as_str()).collect();
    assert_eq!(peptides, vec!["AAGK", "DDEK"]);

    let aagk = &candidates[0];
    assert_eq!(aagk.first_rt, 10.0);
    assert_eq!(aagk.last_rt, 15.0);
    assert_eq!(aagk.max_rt_diff, 5.0);
    assert_eq!(aagk.z, 2);
    assert_eq!(aagk.precursor_id, "101");
    assert!(aagk.frac_variation > 0.05);

    // Every output peptide exists in the input, exactly once.
    for candidate in &candidates {
        assert!(records.iter().any(|r| r.peptide == candidate.peptide));
    }
    let mut sorted = peptides.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), peptides.len());
}

#[test]
fn test_slice_then_detect() {
    let records = read_peptide_records(fixture("sample_export.csv")).unwrap();

    // DDEK elutes past the default window and drops out before detection.
    let sliced = slice_rt_range(
        &records,
        isoseek::filters::DEFAULT_RT_MIN,
        isoseek::filters::DEFAULT_RT_MAX,
    );
    assert!(sliced.len() < records.len());

    let candidates = find_candidates(&sliced, &CandidateTolerance::default());
    let peptides: Vec<&str> = candidates.iter().map(|c| c.peptide.as_str()).collect();
    assert_eq!(peptides, vec!["AAGK"]);
}

#[test]
fn test_annotate_and_write_candidates() {
    let records = read_peptide_records(fixture("sample_export.csv")).unwrap();
    let proteins = read_protein_descriptions(fixture("proteins.csv")).unwrap();

    let candidates = find_candidates(&records, &CandidateTolerance::default());
    let annotated = annotate_descriptions(&candidates, &proteins);

    assert_eq!(annotated.len(), candidates.len());
    assert!(
        annotated[0]
            .description
            .as_deref()
            .unwrap()
            .contains("enolase")
    );
    // DDEK maps to an accession absent from the protein table.
    assert_eq!(annotated[1].description, None);

    let out_path = std::env::temp_dir().join("isoseek_detection_test_candidates.csv");
    write_candidates_csv(&candidates, &out_path).unwrap();
    let written = std::fs::read_to_string(&out_path).unwrap();
    let header = written.lines().next().unwrap();
    assert_eq!(
        header,
        "Peptide,z,first_RT,last_RT,max_RT_diff,Precursor Id,1/k0,frac_variation,m/z,Mass,Scan,Accession"
    );
    assert_eq!(written.lines().count(), 1 + candidates.len());
    std::fs::remove_file(&out_path).ok();
}
