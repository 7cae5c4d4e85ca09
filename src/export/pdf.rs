use crate::token::TokenMatrix;
use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Minimal PDF builder for attendance documents: multi-page tables and
/// single-page student passes. Built on `pdf-writer`, Helvetica only.
pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,

    page_w: f32,
    page_h: f32,
    margin: f32,
    row_h: f32,

    next_id: i32,
    font_id: Ref,
    bold_font_id: Ref,

    font_size: f32,
    header_font_size: f32,
    title_font_size: f32,
}

impl Default for PdfManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfManager {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let bold_font_id = Ref::new(4);

        pdf.type1_font(font_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
        pdf.type1_font(bold_font_id)
            .base_font(Name(b"Helvetica-Bold"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,

            // A4 portrait
            page_w: 595.0,
            page_h: 842.0,
            margin: 50.0,
            row_h: 20.0,

            next_id: 5,
            font_id,
            bold_font_id,

            font_size: 10.0,
            header_font_size: 11.0,
            title_font_size: 14.0,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    /// Open a new page and return its (empty) content stream.
    fn new_page(&mut self) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        {
            let mut page = self.pdf.page(page_id);
            page.parent(self.pages_id)
                .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
                .contents(content_id);

            let mut resources = page.resources();
            let mut fonts = resources.fonts();
            fonts.pair(Name(b"F1"), self.font_id);
            fonts.pair(Name(b"F2"), self.bold_font_id);
        }

        self.current_content_id = Some(content_id);

        Content::new()
    }

    fn finalize_page(&mut self, content: Content) {
        if let Some(id) = self.current_content_id.take() {
            self.pdf.stream(id, &content.finish());
        }
    }

    fn draw_text(content: &mut Content, font: &[u8], x: f32, y: f32, size: f32, text: &str) {
        let bytes = win_ansi(text);
        content.begin_text();
        content.set_font(Name(font), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(&bytes));
        content.end_text();
    }

    /// Approximate Helvetica advance width, enough to center cell text.
    fn text_width(text: &str, size: f32) -> f32 {
        text.chars().count() as f32 * size * 0.52
    }

    fn draw_row(
        &self,
        content: &mut Content,
        y: f32,
        col_widths: &[f32],
        row: &[String],
        header: bool,
    ) {
        let (font, size): (&[u8], f32) = if header {
            (b"F2", self.header_font_size)
        } else {
            (b"F1", self.font_size)
        };

        let mut x = self.margin;

        for (text, &w) in row.iter().zip(col_widths) {
            let tw = Self::text_width(text, size).min(w - 8.0);
            let tx = x + (w - tw) / 2.0;
            Self::draw_text(content, font, tx, y + 6.0, size, text);

            content.save_state();
            content.set_stroke_rgb(0.0, 0.0, 0.0);
            content.set_line_width(0.75);
            content.rect(x, y, w, self.row_h);
            content.stroke();
            content.restore_state();

            x += w;
        }
    }

    /// Column widths from header + content, scaled down to fit the page.
    fn compute_col_widths(&self, headers: &[String], rows: &[Vec<String>]) -> Vec<f32> {
        let mut widths: Vec<f32> = headers
            .iter()
            .map(|h| Self::text_width(h, self.header_font_size) + 16.0)
            .collect();

        for row in rows {
            for (i, cell) in row.iter().enumerate().take(widths.len()) {
                widths[i] = widths[i].max(Self::text_width(cell, self.font_size) + 16.0);
            }
        }

        let total: f32 = widths.iter().sum();
        let max = self.page_w - 2.0 * self.margin;

        if total > max {
            let scale = max / total;
            for w in &mut widths {
                *w *= scale;
            }
        }

        widths
    }

    fn draw_page_header_footer(&self, content: &mut Content, title: &str, page: usize) {
        Self::draw_text(
            content,
            b"F2",
            self.margin,
            self.page_h - self.margin + 15.0,
            self.title_font_size,
            title,
        );

        let pg = format!("Page {}", page);
        Self::draw_text(
            content,
            b"F1",
            self.page_w - self.margin - 60.0,
            self.margin - 35.0,
            self.font_size,
            &pg,
        );
    }

    fn fill_band(&self, content: &mut Content, y: f32, width: f32, grey: f32) {
        content.save_state();
        content.set_fill_gray(grey);
        content.rect(self.margin, y, width, self.row_h);
        content.fill_nonzero();
        content.restore_state();
    }

    /// Multi-page table: the header row is repeated on every page, body rows
    /// keep the order they are given in.
    pub fn write_table(&mut self, title: &str, headers: &[String], rows: &[Vec<String>]) {
        let col_widths = self.compute_col_widths(headers, rows);
        let table_w: f32 = col_widths.iter().sum();

        let mut remaining: &[Vec<String>] = rows;
        let mut page_idx = 1;

        loop {
            let mut content = self.new_page();
            self.draw_page_header_footer(&mut content, title, page_idx);

            let mut y = self.page_h - self.margin - 30.0;

            // header: grey band, white bold text
            self.fill_band(&mut content, y, table_w, 0.5);
            content.set_fill_gray(0.96);
            self.draw_row(&mut content, y, &col_widths, headers, true);
            content.set_fill_gray(0.0);

            y -= self.row_h;

            let mut consumed = 0;
            for (i, row) in remaining.iter().enumerate() {
                if y < self.margin {
                    break;
                }

                if i % 2 == 1 {
                    self.fill_band(&mut content, y, table_w, 0.94);
                }

                self.draw_row(&mut content, y, &col_widths, row, false);

                y -= self.row_h;
                consumed += 1;
            }

            self.finalize_page(content);
            remaining = &remaining[consumed..];
            page_idx += 1;

            if remaining.is_empty() {
                break;
            }
        }
    }

    /// One-page student pass: title, labelled fields, and the token drawn as
    /// vector modules so it prints sharp at any size.
    pub fn write_pass(&mut self, title: &str, fields: &[(&str, &str)], token: &TokenMatrix) {
        let mut content = self.new_page();

        let top = self.page_h - self.margin;
        Self::draw_text(&mut content, b"F2", self.margin, top - 10.0, 20.0, title);

        let mut y = top - 50.0;
        for (label, value) in fields {
            Self::draw_text(&mut content, b"F2", self.margin, y, 12.0, label);
            Self::draw_text(&mut content, b"F1", self.margin + 90.0, y, 12.0, value);
            y -= 22.0;
        }

        // token: 200pt square, quiet zone included
        let side = 200.0;
        let quiet = crate::token::QUIET_ZONE as f32;
        let module = side / (token.width as f32 + 2.0 * quiet);
        let origin_x = self.margin;
        let origin_y = y - 20.0 - side;

        content.save_state();
        content.set_fill_gray(0.0);
        for my in 0..token.width {
            for mx in 0..token.width {
                if token.is_dark(mx, my) {
                    // PDF y axis grows upwards, module rows grow downwards
                    let x = origin_x + (mx as f32 + quiet) * module;
                    let y = origin_y + side - (my as f32 + quiet + 1.0) * module;
                    content.rect(x, y, module, module);
                }
            }
        }
        content.fill_nonzero();
        content.restore_state();

        self.finalize_page(content);
    }

    pub fn save(mut self, path: &Path) -> std::io::Result<()> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);

        {
            let mut pages = self.pdf.pages(self.pages_id);
            pages.count(self.page_refs.len() as i32);
            pages.kids(self.page_refs.iter().copied());
        }

        let bytes = self.pdf.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}

/// Encode text for the WinAnsi Helvetica font: Latin-1 characters map to
/// their byte, anything else becomes '?'. Other scripts only survive in the
/// CSV / JSON / XLSX reports.
fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| {
            let code = c as u32;
            if (0x20..0x7F).contains(&code) || (0xA0..=0xFF).contains(&code) {
                code as u8
            } else {
                b'?'
            }
        })
        .collect()
}
