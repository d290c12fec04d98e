#![allow(dead_code)]

use async_trait::async_trait;
use card_render::{RenderBackend, RenderError, RenderRequest, Result};
use lopdf::{Dictionary, Document, Object, Stream};
use std::sync::Mutex;

/// Backend that records every request and answers with a canned response
pub struct RecordingBackend {
    pub requests: Mutex<Vec<RenderRequest>>,
    response: std::result::Result<Vec<u8>, (u16, String)>,
}

impl RecordingBackend {
    pub fn returning(pdf: Vec<u8>) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            response: Ok(pdf),
        }
    }

    pub fn failing(status: u16, message: &str) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            response: Err((status, message.to_string())),
        }
    }

    pub fn last_request(&self) -> RenderRequest {
        self.requests.lock().unwrap().last().cloned().unwrap()
    }
}

#[async_trait]
impl RenderBackend for RecordingBackend {
    async fn render(&self, request: &RenderRequest) -> Result<Vec<u8>> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.response {
            Ok(pdf) => Ok(pdf.clone()),
            Err((status, message)) => Err(RenderError::Backend {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}

fn rect(width: f32, height: f32) -> Object {
    Object::Array(vec![
        Object::Integer(0),
        Object::Integer(0),
        Object::Real(width),
        Object::Real(height),
    ])
}

/// PDF with `num_pages` pages; the MediaBox is inherited from the page tree
/// and each page declares its own TrimBox
pub fn create_test_pdf(num_pages: usize, trim_width_pt: f32, trim_height_pt: f32) -> Vec<u8> {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let mut kids = Vec::new();
    for _ in 0..num_pages {
        let content_id = doc.add_object(Stream::new(Dictionary::new(), b"q Q".to_vec()));
        let page_id = doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(pages_id)),
            ("TrimBox", rect(trim_width_pt, trim_height_pt)),
            ("Resources", Object::Dictionary(Dictionary::new())),
            ("Contents", Object::Reference(content_id)),
        ]));
        kids.push(Object::Reference(page_id));
    }

    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(kids)),
        ("Count", Object::Integer(num_pages as i64)),
        ("MediaBox", rect(trim_width_pt + 18.0, trim_height_pt + 18.0)),
    ]);
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}
