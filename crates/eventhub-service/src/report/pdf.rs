//! PDF export of the event list.
//!
//! Renders every event with its resolved participants onto A4 pages,
//! one text line at a time, breaking to a new page when the current one
//! runs out of vertical space.

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference};

use eventhub_core::error::{AppError, ErrorKind};
use eventhub_core::result::AppResult;

use crate::event::PopulatedEvent;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 20.0;
const LINE_HEIGHT_MM: f32 = 7.0;
const TITLE_SIZE: f32 = 18.0;
const HEADING_SIZE: f32 = 13.0;
const BODY_SIZE: f32 = 10.0;

/// Renders the events listing as a PDF document.
#[derive(Debug, Clone, Default)]
pub struct EventsPdfRenderer;

impl EventsPdfRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render all events, soonest first, into PDF bytes.
    pub fn render(&self, events: &[PopulatedEvent]) -> AppResult<Vec<u8>> {
        let (doc, page, layer) =
            PdfDocument::new("Events", Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "content");
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(pdf_error)?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(pdf_error)?;

        let mut cursor = Cursor::new(doc, page, layer);
        cursor.line("Events", TITLE_SIZE, &bold);
        cursor.advance(LINE_HEIGHT_MM);

        if events.is_empty() {
            cursor.line("No events found.", BODY_SIZE, &regular);
        }

        for populated in events {
            let event = &populated.event;

            cursor.line(&event.title, HEADING_SIZE, &bold);
            cursor.line(
                &format!("Date: {}", event.date.format("%Y-%m-%d %H:%M UTC")),
                BODY_SIZE,
                &regular,
            );
            cursor.line(&format!("Location: {}", event.location), BODY_SIZE, &regular);
            cursor.line(&event.description, BODY_SIZE, &regular);

            let bound = event
                .max_participants
                .map(|m| format!(" (max {m})"))
                .unwrap_or_default();
            cursor.line(
                &format!("Participants: {}{bound}", populated.participants.len()),
                BODY_SIZE,
                &regular,
            );
            for participant in &populated.participants {
                cursor.line(
                    &format!("  - {} <{}>", participant.full_name, participant.email),
                    BODY_SIZE,
                    &regular,
                );
            }
            cursor.advance(LINE_HEIGHT_MM);
        }

        cursor.finish().save_to_bytes().map_err(pdf_error)
    }
}

fn pdf_error(e: printpdf::Error) -> AppError {
    AppError::with_source(ErrorKind::Internal, "Failed to render PDF", e)
}

/// Tracks the write position on the current page, adding pages as needed.
struct Cursor {
    doc: PdfDocumentReference,
    layer: printpdf::PdfLayerReference,
    y: f32,
}

impl Cursor {
    fn new(
        doc: PdfDocumentReference,
        page: printpdf::PdfPageIndex,
        layer: printpdf::PdfLayerIndex,
    ) -> Self {
        let layer = doc.get_page(page).get_layer(layer);
        Self {
            doc,
            layer,
            y: PAGE_HEIGHT_MM - MARGIN_MM,
        }
    }

    fn line(&mut self, text: &str, size: f32, font: &IndirectFontRef) {
        if self.y < MARGIN_MM {
            let (page, layer) =
                self.doc
                    .add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "content");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = PAGE_HEIGHT_MM - MARGIN_MM;
        }
        self.layer
            .use_text(text, size, Mm(MARGIN_MM), Mm(self.y), font);
        self.y -= LINE_HEIGHT_MM;
    }

    fn advance(&mut self, mm: f32) {
        self.y -= mm;
    }

    fn finish(self) -> PdfDocumentReference {
        self.doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::ParticipantSummary;
    use chrono::{Duration, Utc};
    use eventhub_entity::event::Event;
    use uuid::Uuid;

    fn populated_event(participant_count: usize) -> PopulatedEvent {
        let participants: Vec<ParticipantSummary> = (0..participant_count)
            .map(|i| ParticipantSummary {
                id: Uuid::new_v4(),
                full_name: format!("Participant {i}"),
                email: format!("p{i}@example.com"),
            })
            .collect();

        PopulatedEvent {
            event: Event {
                id: Uuid::new_v4(),
                title: "Rust Meetup Lyon".to_string(),
                description: "Monthly systems programming meetup".to_string(),
                location: "12 Rue de la République".to_string(),
                date: Utc::now() + Duration::days(7),
                image_url: None,
                image_key: None,
                participants: participants.iter().map(|p| p.id).collect(),
                max_participants: Some(50),
                created_by: None,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            },
            participants,
        }
    }

    #[test]
    fn test_render_empty_listing() {
        let bytes = EventsPdfRenderer::new().render(&[]).expect("should render");
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_render_events_with_participants() {
        let events = vec![populated_event(3), populated_event(0)];
        let bytes = EventsPdfRenderer::new()
            .render(&events)
            .expect("should render");
        assert!(bytes.starts_with(b"%PDF"));
    }

    // Enough participants to force a page break.
    #[test]
    fn test_render_spills_onto_second_page() {
        let events = vec![populated_event(80)];
        let bytes = EventsPdfRenderer::new()
            .render(&events)
            .expect("should render");
        assert!(bytes.starts_with(b"%PDF"));
    }
}
