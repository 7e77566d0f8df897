//! Decode-qr command - decode a PromptPay payload without an image.

use clap::Args;
use console::style;

use slip_core::qr::try_decode_promptpay;

/// Arguments for the decode-qr command.
#[derive(Args)]
pub struct DecodeQrArgs {
    /// Raw QR payload text
    payload: String,
}

pub fn run(args: DecodeQrArgs) -> anyhow::Result<()> {
    match try_decode_promptpay(args.payload.trim()) {
        Ok(info) => {
            println!("{}", serde_json::to_string_pretty(&info)?);
            Ok(())
        }
        Err(e) => {
            eprintln!("{} Not a valid PromptPay payload", style("✗").red());
            anyhow::bail!("Malformed QR payload: {}", e)
        }
    }
}
