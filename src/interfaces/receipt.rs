use super::csv::receipt_writer::ReceiptWriter;
use super::text::TextRenderer;
use crate::application::session::OrderSession;
use crate::application::summary::OrderSummary;
use crate::domain::cart::CartLine;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReceiptFormat {
    #[default]
    Csv,
    Json,
    Text,
}

#[derive(Serialize)]
struct JsonReceipt<'a> {
    lines: &'a [CartLine],
    summary: OrderSummary,
    payment: &'static str,
}

/// Writes what is left in the session's cart, in the requested format.
///
/// The text format shows the menu, cart and payment screens in turn.
pub fn write_receipt<W: Write>(
    mut sink: W,
    session: &OrderSession,
    format: ReceiptFormat,
    renderer: &TextRenderer,
) -> Result<()> {
    match format {
        ReceiptFormat::Csv => ReceiptWriter::new(sink).write_cart(session.cart()),
        ReceiptFormat::Json => {
            let receipt = JsonReceipt {
                lines: session.cart().lines(),
                summary: session.summary(),
                payment: session.payments().state().name(),
            };
            serde_json::to_writer_pretty(&mut sink, &receipt)?;
            writeln!(sink)?;
            Ok(())
        }
        ReceiptFormat::Text => {
            sink.write_all(renderer.render_menu(session.catalog()).as_bytes())?;
            sink.write_all(renderer.render_cart(session.cart()).as_bytes())?;
            sink.write_all(
                renderer
                    .render_payment(&session.payments().state())
                    .as_bytes(),
            )?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::engine::PaymentEngine;
    use crate::application::settings::SettingsOwner;
    use crate::domain::catalog::Catalog;
    use crate::domain::menu::ItemId;
    use crate::domain::settings::AccessibilitySettings;
    use crate::infrastructure::simulated::ScriptedGateway;
    use std::sync::Arc;

    #[test]
    fn test_json_receipt() {
        let mut session = OrderSession::new(
            Arc::new(Catalog::builtin()),
            PaymentEngine::new(Box::new(ScriptedGateway::approving())),
        );
        session.add(&ItemId::from("decaf")).unwrap();
        let owner = SettingsOwner::new(AccessibilitySettings::default());

        let mut out = Vec::new();
        write_receipt(&mut out, &session, ReceiptFormat::Json, &TextRenderer::new(owner.view()))
            .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["summary"]["total"], 4000);
        assert_eq!(value["summary"]["line_count"], 1);
        assert_eq!(value["lines"][0]["item"]["id"], "decaf");
        assert_eq!(value["lines"][0]["quantity"], 1);
        assert_eq!(value["payment"], "idle");
    }

    #[test]
    fn test_text_receipt_shows_menu_before_cart() {
        let mut session = OrderSession::new(
            Arc::new(Catalog::builtin()),
            PaymentEngine::new(Box::new(ScriptedGateway::approving())),
        );
        session.add(&ItemId::from("madeleine")).unwrap();
        let owner = SettingsOwner::new(AccessibilitySettings::default());

        let mut out = Vec::new();
        write_receipt(&mut out, &session, ReceiptFormat::Text, &TextRenderer::new(owner.view()))
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        let menu_at = text.find("[베이커리]").unwrap();
        let cart_at = text.find("주문 예정 1개 · 2,800원").unwrap();
        let payment_at = text.find("결제 수단 선택").unwrap();
        assert!(menu_at < cart_at && cart_at < payment_at);
    }
}
