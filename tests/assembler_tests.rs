//! End-to-end properties of greedy fragment assembly.

use frag_assembler::{Assembler, AssemblyConfig, AssemblyReport, Sequence, SequenceError};

fn seqs(values: &[&str]) -> Vec<Sequence> {
    values
        .iter()
        .map(|s| Sequence::new(*s).expect("valid test sequence"))
        .collect()
}

#[test]
fn test_two_fragment_superstring() {
    let mut assembler = Assembler::new(&seqs(&["ATTAGACCTG", "CCTGCCGGAA"]));
    assembler.assemble_all();

    assert_eq!(
        assembler.fragments(),
        seqs(&["ATTAGACCTGCCGGAA"]).as_slice()
    );
}

#[test]
fn test_non_overlapping_fragments_stay_apart() {
    let input = seqs(&["G", "C", "T"]);
    let mut assembler = Assembler::new(&input);

    assert_eq!(assembler.assemble_all(), 0);
    assert_eq!(assembler.fragments(), input.as_slice());
}

#[test]
fn test_shuffled_reads_reconstruct_source() {
    // Overlapping windows of ATTAGACCTGCCGGAATAC, out of order
    let reads = seqs(&["CCGGAATAC", "ATTAGACCTG", "GACCTGCCG", "CTGCCGGAA"]);
    let mut assembler = Assembler::new(&reads);
    assembler.assemble_all();

    assert!(assembler.is_assembled());
    assert_eq!(assembler.fragments()[0].as_str(), "ATTAGACCTGCCGGAATAC");
}

#[test]
fn test_each_merge_shrinks_working_set_by_one() {
    let mut assembler = Assembler::new(&seqs(&["CAA", "AAG", "AGT", "GTC", "TTT"]));

    loop {
        let before = assembler.len();
        if !assembler.assemble_once() {
            assert_eq!(assembler.len(), before);
            break;
        }
        assert_eq!(assembler.len(), before - 1);
    }
}

#[test]
fn test_merge_length_identity() {
    let samples = ["GATTACA", "ACATTAG", "TAGGAT", "CCC", "ACA"];
    for a in samples {
        for b in samples {
            let (a, b) = (Sequence::new(a).unwrap(), Sequence::new(b).unwrap());
            let overlap = a.calculate_overlap(&b);
            assert!(overlap <= a.len().min(b.len()));
            assert_eq!(a.merged_with(&b).len(), a.len() + b.len() - overlap);
        }
    }
}

#[test]
fn test_invalid_symbol_produces_no_sequence() {
    let result = Sequence::new("CATN");
    assert!(matches!(
        result,
        Err(SequenceError::InvalidSymbol { symbol: 'N', .. })
    ));
}

#[test]
fn test_caller_collection_is_independent() {
    let mut input = seqs(&["CAA", "AAG"]);
    let mut assembler = Assembler::new(&input);

    input.push(Sequence::new("TTT").unwrap());
    assert_eq!(assembler.len(), 2);

    assembler.assemble_all();
    assert_eq!(input.len(), 3);
    assert_eq!(input[0].as_str(), "CAA");
}

#[test]
fn test_repeat_assemble_all_is_noop() {
    let mut assembler = Assembler::new(&seqs(&["CAA", "AAG", "GGG", "TTTT"]));
    assembler.assemble_all();
    let settled = assembler.fragments().to_vec();

    assert_eq!(assembler.assemble_all(), 0);
    assert!(!assembler.assemble_once());
    assert_eq!(assembler.fragments(), settled.as_slice());
}

#[test]
fn test_min_overlap_splits_assembly() {
    let reads = seqs(&["ATTAGACCTG", "CCTGCCGGAA"]);

    let strict = AssemblyReport::run(&reads, AssemblyConfig { min_overlap: 5 });
    assert!(!strict.complete);
    assert_eq!(strict.output_fragments, 2);

    let relaxed = AssemblyReport::run(&reads, AssemblyConfig { min_overlap: 4 });
    assert!(relaxed.complete);
}
