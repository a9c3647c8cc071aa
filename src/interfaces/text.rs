use crate::application::settings::SettingsView;
use crate::domain::cart::Cart;
use crate::domain::catalog::Catalog;
use crate::domain::payment::PaymentState;
use crate::domain::settings::AccessibilitySettings;

// Blank rows pushed above the content when the layout is lowered.
const LOWERED_LAYOUT_ROWS: usize = 4;

/// Plain-text rendering of the kiosk screens for terminals.
///
/// Reads the accessibility settings on every render, so changes made by the
/// settings owner show up on the next repaint.
pub struct TextRenderer {
    settings: SettingsView,
}

impl TextRenderer {
    pub fn new(settings: SettingsView) -> Self {
        Self { settings }
    }

    pub fn render_menu(&self, catalog: &Catalog) -> String {
        let settings = self.settings.current();
        let mut out = String::new();
        for category in catalog.list_categories() {
            out.push_str(&emphasize(&settings, &format!("[{category}]")));
            out.push('\n');
            for item in catalog.items_in(category) {
                let entry = if settings.large_text {
                    format!(
                        "  {} {}\n      {}  ({})\n",
                        item.icon, item.name, item.price, item.description
                    )
                } else {
                    format!(
                        "  {} {} {} ({})\n",
                        item.icon, item.name, item.price, item.description
                    )
                };
                out.push_str(&entry);
            }
        }
        frame(&settings, out)
    }

    pub fn render_cart(&self, cart: &Cart) -> String {
        let settings = self.settings.current();
        let mut out = String::new();
        for line in cart.lines() {
            let entry = if settings.large_text {
                format!(
                    "{} {}\n    {} x {} = {}\n",
                    line.item.icon,
                    line.item.name,
                    line.quantity,
                    line.item.price,
                    line.subtotal()
                )
            } else {
                format!(
                    "{} {} x{} {}\n",
                    line.item.icon,
                    line.item.name,
                    line.quantity,
                    line.subtotal()
                )
            };
            out.push_str(&entry);
        }
        let summary = format!("주문 예정 {}개 · {}", cart.total_quantity(), cart.total());
        out.push_str(&emphasize(&settings, &summary));
        out.push('\n');
        frame(&settings, out)
    }

    pub fn render_payment(&self, state: &PaymentState) -> String {
        let settings = self.settings.current();
        let status = match state {
            PaymentState::Idle => "결제 수단 선택".to_string(),
            PaymentState::Processing(attempt) => {
                format!("결제 처리 중... ({} {})", attempt.method, attempt.amount)
            }
            PaymentState::Succeeded { attempt, reference } => {
                format!("결제 완료! {} [{reference}]", attempt.amount)
            }
            PaymentState::Failed { failure, .. } => {
                format!("결제 실패: {failure}. 다시 시도해 주세요")
            }
        };
        frame(&settings, format!("{}\n", emphasize(&settings, &status)))
    }
}

fn emphasize(settings: &AccessibilitySettings, text: &str) -> String {
    if settings.high_contrast {
        format!("\x1b[1m{text}\x1b[0m")
    } else {
        text.to_string()
    }
}

fn frame(settings: &AccessibilitySettings, body: String) -> String {
    if settings.accessibility_mode {
        format!("{}{body}", "\n".repeat(LOWERED_LAYOUT_ROWS))
    } else {
        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::settings::SettingsOwner;
    use crate::domain::menu::MenuItem;
    use crate::domain::settings::AccessibilityFlag;

    fn cart() -> Cart {
        let mut cart = Cart::new();
        let croissant = MenuItem::new("croissant", "베이커리", "크루아상", 3200, "", "🥐");
        cart.add(&croissant);
        cart.add(&croissant);
        cart
    }

    #[test]
    fn test_render_cart_plain() {
        let owner = SettingsOwner::new(AccessibilitySettings::default());
        let renderer = TextRenderer::new(owner.view());
        assert_eq!(
            renderer.render_cart(&cart()),
            "🥐 크루아상 x2 6,400원\n주문 예정 2개 · 6,400원\n"
        );
    }

    #[test]
    fn test_render_follows_settings_changes() {
        let owner = SettingsOwner::new(AccessibilitySettings::default());
        let renderer = TextRenderer::new(owner.view());

        owner.toggle(AccessibilityFlag::LargeText);
        let large = renderer.render_cart(&cart());
        assert!(large.starts_with("🥐 크루아상\n    2 x 3,200원 = 6,400원\n"));

        owner.toggle(AccessibilityFlag::AccessibilityMode);
        owner.toggle(AccessibilityFlag::HighContrast);
        let lowered = renderer.render_payment(&PaymentState::Idle);
        assert_eq!(lowered, "\n\n\n\n\x1b[1m결제 수단 선택\x1b[0m\n");
    }

    #[test]
    fn test_render_menu_lists_categories() {
        let owner = SettingsOwner::new(AccessibilitySettings::default());
        let renderer = TextRenderer::new(owner.view());
        let menu = renderer.render_menu(&Catalog::builtin());
        assert!(menu.starts_with("[에스프레소]\n  ☕️ 아메리카노 2,500원"));
        assert!(menu.contains("[시즌]"));
    }
}
