//! Demonstrates converting a small Turtle record into lobid JSON-LD.
//!
//! Run with: `cargo run --example convert_record -p lobid-rdf-to-json`

use lobid_rdf_to_json::{convert, LabelDictionary, ProjectionOptions, RdfFormat};

const LABELS: &str = r#"[
    { "uri": "http://purl.org/dc/terms/title", "name": "title", "referenceType": "String" },
    { "uri": "http://purl.org/dc/terms/creator", "name": "creator", "referenceType": "@id" },
    { "uri": "http://www.w3.org/2004/02/skos/core#prefLabel", "name": "prefLabel", "referenceType": "String" },
    { "uri": "http://purl.org/lobid/lv#contributorOrder", "name": "contributorOrder", "referenceType": "@id", "container": "@list" }
]"#;

const RECORD: &str = r#"
@prefix dc: <http://purl.org/dc/terms/> .
@prefix lv: <http://purl.org/lobid/lv#> .
@prefix skos: <http://www.w3.org/2004/02/skos/core#> .

<http://lobid.org/resources/HT000000001> dc:title "Der Rhein" ;
    dc:creator <http://d-nb.info/gnd/118540238> ;
    lv:contributorOrder ( <http://d-nb.info/gnd/118540238> ) .

<http://d-nb.info/gnd/118540238> skos:prefLabel "Goethe, Johann Wolfgang von" .
"#;

fn main() {
    let dictionary = match LabelDictionary::from_json_str(LABELS) {
        Ok(dictionary) => dictionary,
        Err(e) => {
            eprintln!("Label error: {e}");
            return;
        }
    };
    println!("Labels: {}", dictionary.labels().len());

    match convert(
        RECORD,
        RdfFormat::Turtle,
        "http://lobid.org/resources/HT000000001",
        &dictionary,
        &ProjectionOptions::default(),
    ) {
        Ok(json) => println!(
            "{}",
            serde_json::to_string_pretty(&json).unwrap_or_else(|e| format!("JSON error: {e}"))
        ),
        Err(e) => eprintln!("Conversion error: {e}"),
    }
}
