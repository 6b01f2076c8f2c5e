//! Tests d'intégration du pipeline de génération

use linkgen_core::{
    max_homopolymer, reverse_complement, Distance, DistanceMetric, Levenshtein, LinkerError,
    Pipeline, PipelineConfig,
};

#[test]
fn test_end_to_end_five_barcodes() {
    let config = PipelineConfig {
        alphabet: "ATCG".to_string(),
        length: 8,
        max_run: 2,
        min_distance: 3,
        count: 5,
        seed: Some(2024),
        ..Default::default()
    };

    let pipeline = Pipeline::new(config).unwrap();
    let records = pipeline.run().unwrap();

    assert_eq!(records.len(), 5);

    // Deux lignes par barcode, indices 00 à 04
    let lines: Vec<String> = records
        .iter()
        .flat_map(|r| {
            [
                format!("{}\t{}", r.forward_label, r.pair.forward),
                format!("{}\t{}", r.reverse_label, r.pair.reverse),
            ]
        })
        .collect();
    assert_eq!(lines.len(), 10);
    for (i, record) in records.iter().enumerate() {
        assert_eq!(record.forward_label, format!("MseI-linker-{:02}-F", i));
        assert_eq!(record.reverse_label, format!("MseI-linker-{:02}-R", i));
    }

    let barcodes: Vec<&str> = records.iter().map(|r| r.pair.barcode.as_str()).collect();
    for barcode in &barcodes {
        assert_eq!(barcode.len(), 8);
        assert!(barcode.bytes().all(|b| b"ATCG".contains(&b)));
        assert!(max_homopolymer(barcode.as_bytes()) <= 2);
    }
    for (i, a) in barcodes.iter().enumerate() {
        for b in &barcodes[i + 1..] {
            assert_ne!(a, b);
            assert!(Levenshtein.distance(a, b) > 3, "{} / {}", a, b);
        }
    }
}

#[test]
fn test_default_run_yields_96_linkers() {
    let config = PipelineConfig {
        seed: Some(7),
        ..Default::default()
    };

    let records = Pipeline::new(config).unwrap().run().unwrap();

    assert_eq!(records.len(), 96);
    assert_eq!(records[95].forward_label, "MseI-linker-95-F");
    for record in &records {
        assert!(record.pair.forward.starts_with("TAGTCGGA"));
        assert!(record.pair.forward.ends_with('G'));
        assert!(record.pair.reverse.starts_with("CTAG"));
        assert_eq!(record.pair.forward.len(), 2 + 6 + 8 + 1);
        assert_eq!(record.pair.reverse.len(), 4 + 6 + 8 + 1);
        assert_eq!(
            reverse_complement(&record.pair.reverse[4..]),
            record.pair.forward[2..]
        );
    }
}

#[test]
fn test_exhaustion_single_word_space() {
    let config = PipelineConfig {
        length: 1,
        alphabet: "A".to_string(),
        min_distance: 3,
        count: 2,
        seed: Some(1),
        ..Default::default()
    };

    match Pipeline::new(config).unwrap().generate() {
        Err(LinkerError::AcceptanceExhausted {
            requested,
            accepted,
            ..
        }) => {
            assert_eq!(requested, 2);
            assert_eq!(accepted, 1);
        }
        other => panic!("résultat inattendu: {:?}", other),
    }
}

#[test]
fn test_exhaustion_with_draw_cap() {
    // Distance 7 sur des mots de 8: l'espace est vite saturé
    let config = PipelineConfig {
        min_distance: 7,
        count: 96,
        seed: Some(5),
        max_draws: Some(5_000),
        ..Default::default()
    };

    let err = Pipeline::new(config).unwrap().generate().unwrap_err();
    match err {
        LinkerError::AcceptanceExhausted { accepted, draws, .. } => {
            assert!(accepted < 96);
            assert_eq!(draws, 5_000);
        }
        other => panic!("erreur inattendue: {other}"),
    }
}

#[test]
fn test_same_seed_same_barcodes() {
    let config = PipelineConfig {
        count: 12,
        seed: Some(31),
        ..Default::default()
    };

    let a = Pipeline::new(config.clone()).unwrap().generate().unwrap();
    let b = Pipeline::new(config).unwrap().generate().unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_hamming_metric() {
    let config = PipelineConfig {
        metric: DistanceMetric::Hamming,
        count: 20,
        seed: Some(11),
        ..Default::default()
    };

    let barcodes = Pipeline::new(config).unwrap().generate().unwrap();
    for (i, a) in barcodes.iter().enumerate() {
        for b in &barcodes[i + 1..] {
            assert!(DistanceMetric::Hamming.distance(a, b) > 3);
        }
    }
}

#[test]
fn test_config_roundtrip_json() {
    let config = PipelineConfig {
        seed: Some(3),
        metric: DistanceMetric::Hamming,
        ..Default::default()
    };

    let json = serde_json::to_string(&config).unwrap();
    let parsed: PipelineConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(config, parsed);
}
