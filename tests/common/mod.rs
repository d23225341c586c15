use lopdf::{Dictionary, Document, Object, Stream};

/// テスト用PDFの1ページ分
pub struct PageSpec {
    pub width: f32,
    pub height: f32,
    pub content: &'static str,
}

impl PageSpec {
    pub fn blank(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            content: "",
        }
    }
}

/// 左下に塗りつぶした正方形を描く
pub const BLACK_SQUARE_36: &str = "0 0 0 rg\n0 0 36 36 re\nf";

/// lopdfでページを並べたPDFを作る
pub fn build_pdf(pages: &[PageSpec]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut kids = Vec::new();
    for page in pages {
        let content_id = doc.add_object(Stream::new(
            Dictionary::new(),
            page.content.as_bytes().to_vec(),
        ));

        let page_id = doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(pages_id)),
            (
                "MediaBox",
                vec![0.into(), 0.into(), page.width.into(), page.height.into()].into(),
            ),
            ("Contents", Object::Reference(content_id)),
            ("Resources", Dictionary::new().into()),
        ]));
        kids.push(Object::Reference(page_id));
    }

    doc.objects.insert(
        pages_id,
        Dictionary::from_iter(vec![
            ("Type", "Pages".into()),
            ("Count", (kids.len() as i64).into()),
            ("Kids", Object::Array(kids)),
        ])
        .into(),
    );

    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", "Catalog".into()),
        ("Pages", Object::Reference(pages_id)),
    ]));
    doc.trailer.set("Root", Object::Reference(catalog_id));

    let mut output = Vec::new();
    doc.save_to(&mut output).unwrap();
    output
}
