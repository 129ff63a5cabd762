//! Integration tests for text sources, including PDFs built in memory.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use pdfoutline::{
    extract_outline_from_bytes, outline_from_source, Error, MemorySource, PageSelection,
    PdfOutline, PdfSource, RecordKind, SourceOptions, TextSource,
};

/// Build a PDF with one page per entry, one text block per line.
fn build_pdf(pages: &[&[&str]], title: &str) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids = Vec::new();
    for lines in pages {
        let mut operations = Vec::new();
        for (i, line) in lines.iter().enumerate() {
            operations.push(Operation::new("BT", vec![]));
            operations.push(Operation::new("Tf", vec!["F1".into(), 12.into()]));
            operations.push(Operation::new(
                "Td",
                vec![72.into(), (720 - 16 * i as i64).into()],
            ));
            operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
            operations.push(Operation::new("ET", vec![]));
        }
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(Object::Reference(page_id));
    }

    let count = kids.len() as i64;
    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => count,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let info_id = doc.add_object(dictionary! {
        "Title" => Object::string_literal(title),
        "Producer" => Object::string_literal("pdfoutline tests"),
    });
    doc.trailer.set("Info", info_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}

fn report_pdf() -> Vec<u8> {
    build_pdf(
        &[
            &["INTRODUCTION AND SCOPE", "this report studies outlines."],
            &["Methods And Data", "we sampled every page twice."],
        ],
        "Outline Study",
    )
}

#[test]
fn test_pdf_source_metadata() {
    let source = PdfSource::from_bytes(&report_pdf()).unwrap();
    assert_eq!(source.page_count(), 2);

    let metadata = source.metadata().unwrap();
    assert_eq!(metadata.page_count, 2);
    assert_eq!(metadata.title.as_deref(), Some("Outline Study"));
    assert_eq!(metadata.producer.as_deref(), Some("pdfoutline tests"));
    assert!(metadata.pdf_version.starts_with("1."));
    assert!(!metadata.encrypted);
}

#[test]
fn test_pdf_outline_extraction() {
    let outline = extract_outline_from_bytes(&report_pdf()).unwrap();

    let headings: Vec<(RecordKind, &str)> =
        outline.iter().map(|r| (r.kind, r.text.as_str())).collect();
    assert_eq!(
        headings,
        vec![
            (RecordKind::Heading, "INTRODUCTION AND SCOPE"),
            (RecordKind::Subheading, "Methods And Data"),
        ]
    );
    assert_eq!(outline.records[0].body, vec!["this report studies outlines."]);
    assert_eq!(outline.records[1].body, vec!["we sampled every page twice."]);
    assert_eq!(
        outline.metadata.as_ref().and_then(|m| m.title.as_deref()),
        Some("Outline Study")
    );
}

#[test]
fn test_page_selection() {
    let options = SourceOptions::new().with_pages(PageSelection::Pages(vec![2..=2]));
    let source = PdfSource::from_bytes_with_options(&report_pdf(), options).unwrap();

    let pages = source.page_texts().unwrap();
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].number, 2);

    let outline = outline_from_source(&source).unwrap();
    assert_eq!(outline.len(), 1);
    assert_eq!(outline.records[0].kind, RecordKind::Subheading);
}

#[test]
fn test_page_out_of_range_strict() {
    let options = SourceOptions::new().with_pages(PageSelection::Range(1..=9));
    let source = PdfSource::from_bytes_with_options(&report_pdf(), options).unwrap();

    assert!(matches!(
        source.page_texts(),
        Err(Error::PageOutOfRange(9, 2))
    ));
}

#[test]
fn test_page_out_of_range_lenient() {
    let result = PdfOutline::new()
        .lenient()
        .with_pages(PageSelection::Range(2..=9))
        .extract_bytes(&report_pdf())
        .unwrap();

    assert_eq!(result.outline().len(), 1);
    assert_eq!(result.outline().records[0].text, "Methods And Data");
}

#[test]
fn test_pdf_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.pdf");
    std::fs::write(&path, report_pdf()).unwrap();

    assert!(pdfoutline::is_pdf(&path));
    let outline = pdfoutline::extract_outline(&path).unwrap();
    assert_eq!(outline.len(), 2);

    let display = pdfoutline::to_display_text(&path).unwrap();
    assert!(display.starts_with("Heading: INTRODUCTION AND SCOPE\n"));
}

#[test]
fn test_non_pdf_input_is_source_unavailable() {
    let err = PdfSource::from_bytes(b"just some text\n").err().unwrap();
    assert!(matches!(err, Error::UnknownFormat));
    assert!(err.is_source_unavailable());

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.pdf");
    std::fs::write(&path, "INTRODUCTION\nnot really a pdf").unwrap();
    let err = pdfoutline::extract_outline(&path).unwrap_err();
    assert!(err.is_source_unavailable());
}

#[test]
fn test_memory_source_lines() {
    let source = MemorySource::from_text("PREFACE NOTES\nfirst page body\x0cSECOND PAGE TITLE");
    assert_eq!(source.page_count(), 2);
    assert_eq!(
        source.lines().unwrap(),
        vec!["PREFACE NOTES", "first page body", "SECOND PAGE TITLE"]
    );
    assert!(source.metadata().is_none());
}

#[test]
fn test_boxed_source() {
    let source: Box<dyn TextSource> =
        Box::new(MemorySource::from_pages(["OVERVIEW SECTION\nwhat follows below."]));
    let outline = outline_from_source(&source).unwrap();
    assert_eq!(outline.records[0].body, vec!["what follows below."]);
}
