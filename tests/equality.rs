//! Equality and hashing across the data model.
//!
//! Equality is structural over every declared field plus the extension bag;
//! hashing is consistent with it and total, including over attributes whose
//! optional fields are all unset.

use notate::{
    Annotation, Confidence, EntityBuilder, HanMorphoAnalysisBuilder, MentionBuilder,
    MorphoAnalysis, MorphoAnalysisBuilder, TokenBuilder,
};
use serde_json::json;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn with_components(builder: MorphoAnalysisBuilder, texts: &[&str]) -> MorphoAnalysisBuilder {
    // Quite basic tokens are fine here; token equality is covered separately.
    texts.iter().fold(builder, |b, text| {
        b.component(TokenBuilder::new(0, text.len(), *text).build().unwrap())
    })
}

fn base_analysis() -> MorphoAnalysis {
    with_components(MorphoAnalysisBuilder::new(), &["beam", "post"])
        .lemma("orange")
        .part_of_speech("woof")
        .raw("cooked")
        .build()
        .unwrap()
}

#[test]
fn morpho_analysis_reflexive_and_hashable() {
    let ma = base_analysis();
    assert_eq!(ma, ma);
    let _ = hash_of(&ma); // must not panic
}

#[test]
fn morpho_analysis_sensitive_to_components() {
    let ma1 = base_analysis();
    let ma2 = with_components(MorphoAnalysisBuilder::new(), &["door", "post"])
        .lemma("orange")
        .part_of_speech("woof")
        .raw("cooked")
        .build()
        .unwrap();
    let _ = hash_of(&ma2);
    assert_ne!(ma1, ma2);
}

#[test]
fn morpho_analysis_sensitive_to_lemma() {
    let ma1 = base_analysis();
    let ma2 = with_components(MorphoAnalysisBuilder::new(), &["beam", "post"])
        .lemma("pear")
        .part_of_speech("woof")
        .raw("cooked")
        .build()
        .unwrap();
    let _ = hash_of(&ma2);
    assert_ne!(ma1, ma2);
}

#[test]
fn morpho_analysis_sensitive_to_part_of_speech() {
    let ma1 = base_analysis();
    let ma2 = with_components(MorphoAnalysisBuilder::new(), &["beam", "post"])
        .lemma("orange")
        .part_of_speech("meow")
        .raw("cooked")
        .build()
        .unwrap();
    let _ = hash_of(&ma2);
    assert_ne!(ma1, ma2);
}

#[test]
fn morpho_analysis_sensitive_to_raw() {
    let ma1 = base_analysis();
    let ma2 = with_components(MorphoAnalysisBuilder::new(), &["beam", "post"])
        .lemma("orange")
        .part_of_speech("woof")
        .raw("hide")
        .build()
        .unwrap();
    let _ = hash_of(&ma2);
    assert_ne!(ma1, ma2);
}

#[test]
fn morpho_analysis_unset_components_unequal_both_directions() {
    let ma1 = base_analysis();
    let ma2 = MorphoAnalysisBuilder::new()
        .lemma("orange")
        .part_of_speech("woof")
        .raw("cooked")
        .build()
        .unwrap();
    assert!(ma2.components().is_none());
    let _ = hash_of(&ma2);

    assert_ne!(ma1, ma2);
    assert_ne!(ma2, ma1);
}

#[test]
fn morpho_analysis_unset_scalar_fields_unequal_both_directions() {
    let ma1 = base_analysis();

    // lemma unset
    let ma2 = with_components(MorphoAnalysisBuilder::new(), &["beam", "post"])
        .part_of_speech("woof")
        .raw("cooked")
        .build()
        .unwrap();
    let _ = hash_of(&ma2);
    assert_ne!(ma1, ma2);
    assert_ne!(ma2, ma1);

    // part of speech unset
    let ma2 = with_components(MorphoAnalysisBuilder::new(), &["beam", "post"])
        .lemma("orange")
        .raw("cooked")
        .build()
        .unwrap();
    let _ = hash_of(&ma2);
    assert_ne!(ma1, ma2);
    assert_ne!(ma2, ma1);

    // raw unset
    let ma2 = with_components(MorphoAnalysisBuilder::new(), &["beam", "post"])
        .lemma("orange")
        .part_of_speech("woof")
        .build()
        .unwrap();
    let _ = hash_of(&ma2);
    assert_ne!(ma1, ma2);
    assert_ne!(ma2, ma1);
}

#[test]
fn morpho_analysis_unset_vs_empty_components_unequal() {
    let unset = MorphoAnalysisBuilder::new()
        .lemma("orange")
        .build()
        .unwrap();
    let empty = MorphoAnalysisBuilder::new()
        .components(Vec::new())
        .lemma("orange")
        .build()
        .unwrap();
    assert_ne!(unset, empty);
    assert_ne!(empty, unset);
}

#[test]
fn han_morpho_analysis_equality() {
    let ma1 = HanMorphoAnalysisBuilder::new().reading("r1").build().unwrap();
    assert_eq!(ma1, ma1);
    let _ = hash_of(&ma1);

    let ma2 = HanMorphoAnalysisBuilder::new().reading("r2").build().unwrap();
    let _ = hash_of(&ma2);
    assert_ne!(ma1, ma2);
    assert_ne!(ma2, ma1);

    // readings left unset
    let ma3 = HanMorphoAnalysisBuilder::new().build().unwrap();
    assert!(ma3.readings().is_none());
    let _ = hash_of(&ma3);
    assert_ne!(ma1, ma3);
    assert_ne!(ma3, ma1);
}

#[test]
fn han_and_plain_morpho_analysis_never_equal() {
    // Same span, both with every optional field unset.
    let plain = Annotation::from(MorphoAnalysisBuilder::new().span(0, 4).build().unwrap());
    let han = Annotation::from(HanMorphoAnalysisBuilder::new().span(0, 4).build().unwrap());
    assert_ne!(plain, han);
    assert_ne!(han, plain);
}

#[test]
fn equal_instances_hash_equal() {
    let ma1 = base_analysis();
    let ma2 = base_analysis();
    assert_eq!(ma1, ma2);
    assert_eq!(hash_of(&ma1), hash_of(&ma2));
}

#[test]
fn extension_bag_participates_in_equality() {
    let bare = TokenBuilder::new(0, 4, "door").build().unwrap();
    let tagged = TokenBuilder::new(0, 4, "door")
        .extended_property("analyzer", json!("morpho-3"))
        .build()
        .unwrap();
    assert_ne!(bare, tagged);
    assert_ne!(hash_of(&bare), hash_of(&tagged));
}

#[test]
fn entity_equality_covers_every_field() {
    let mentions = || {
        vec![
            MentionBuilder::new(0, 4).build().unwrap(),
            MentionBuilder::new(10, 14).build().unwrap(),
        ]
    };
    let base = || {
        EntityBuilder::new()
            .mentions(mentions())
            .head_mention_index(0)
            .entity_type("PERSON")
            .entity_id("Q1")
            .confidence(Confidence::new(0.9).unwrap())
    };

    let entity = base().build().unwrap();
    assert_eq!(entity, base().build().unwrap());
    let _ = hash_of(&entity);

    // Head mention index participates in equality.
    let other_head = base().head_mention_index(1).build().unwrap();
    assert_ne!(entity, other_head);

    // So does the type label.
    let other_type = base().entity_type("ORGANIZATION").build().unwrap();
    assert_ne!(entity, other_type);

    // And the knowledge-base ID.
    let other_id = base().entity_id("Q2").build().unwrap();
    assert_ne!(entity, other_id);
}

#[test]
fn all_optional_fields_unset_still_hashable() {
    let entity = EntityBuilder::new().build().unwrap();
    let _ = hash_of(&entity);
    assert_eq!(entity, EntityBuilder::new().build().unwrap());
}
