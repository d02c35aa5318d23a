//! Terminal implementation of the cart UI boundary.

use std::io::{self, BufRead, Write};

use easyshop_cart::{CartState, CartUi, CheckoutSummary};

/// Renders the cart to stdout and reads confirmations from stdin.
pub struct TerminalUi;

impl CartUi for TerminalUi {
    fn render_cart(&mut self, state: &CartState) {
        println!("Cart");
        println!("----");
        if state.is_empty() {
            println!("  (empty)");
        }
        for item in state.items() {
            println!(
                "  [{}] {}  x{}  {}  ({} each)",
                item.product.product_id,
                item.product.name,
                item.quantity,
                item.line_total.display(),
                item.product.price.display(),
            );
        }
        println!();
        println!(
            "Total Items: {} ({} unique products)",
            state.total_quantity(),
            state.item_count()
        );
        println!("Cart Total: {}", state.display_total());
    }

    fn set_cart_count(&mut self, count: usize) {
        println!("Cart items: {count}");
    }

    fn show_message(&mut self, message: &str) {
        println!("{message}");
    }

    fn show_error(&mut self, message: &str) {
        eprintln!("Error: {message}");
    }

    fn confirm_checkout(&mut self, summary: &CheckoutSummary) -> bool {
        println!("Ready to place your order?");
        println!("{summary}");
        print!("Confirm [y/N]: ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).is_err() {
            return false;
        }
        matches!(line.trim(), "y" | "Y" | "yes")
    }
}
