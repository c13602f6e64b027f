use lopdf::{Document, Object, Stream, StringFormat, dictionary};

/// Builds a one-page document showing `text` and returns its serialized
/// bytes. The trailer carries no /ID, matching what many producers emit.
#[allow(dead_code)]
pub fn sample_pdf(text: &str) -> Vec<u8> {
    serialize(build_document(text))
}

/// Same as [`sample_pdf`] but with an /ID already present in the trailer.
#[allow(dead_code)]
pub fn sample_pdf_with_id(text: &str) -> Vec<u8> {
    let mut doc = build_document(text);
    doc.trailer.set(
        "ID",
        Object::Array(vec![
            Object::String(vec![1u8; 16], StringFormat::Literal),
            Object::String(vec![2u8; 16], StringFormat::Literal),
        ]),
    );
    serialize(doc)
}

fn build_document(text: &str) -> Document {
    let mut doc = Document::with_version("1.5");

    let pages_id = doc.new_object_id();
    let page_id = doc.new_object_id();
    let content_id = doc.new_object_id();
    let font_id = doc.new_object_id();
    let resources_id = doc.new_object_id();

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", Object::Reference(catalog_id));

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![Object::Reference(page_id)],
            "Count" => 1,
        }),
    );
    doc.objects.insert(
        resources_id,
        Object::Dictionary(dictionary! {
            "Font" => dictionary! {
                "F1" => Object::Reference(font_id),
            },
        }),
    );
    doc.objects.insert(
        page_id,
        Object::Dictionary(dictionary! {
            "Type" => "Page",
            "Parent" => Object::Reference(pages_id),
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(612),
                Object::Integer(792),
            ],
            "Resources" => Object::Reference(resources_id),
            "Contents" => Object::Reference(content_id),
        }),
    );
    doc.objects.insert(
        font_id,
        Object::Dictionary(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        }),
    );

    let content = format!("BT\n/F1 12 Tf\n100 700 Td\n({text}) Tj\nET\n");
    let content_stream = Stream::new(dictionary! {}, content.into_bytes());
    doc.objects.insert(content_id, Object::Stream(content_stream));

    doc
}

fn serialize(mut doc: Document) -> Vec<u8> {
    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}
