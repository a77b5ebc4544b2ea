use std::time::Duration;

/// One scripted stage of the mock pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingStep {
    pub progress: u8,
    pub message: &'static str,
    /// Time spent "working" after the step is announced.
    pub delay: Duration,
}

const fn step(progress: u8, message: &'static str, delay_ms: u64) -> ProcessingStep {
    ProcessingStep {
        progress,
        message,
        delay: Duration::from_millis(delay_ms),
    }
}

/// Progress strictly increases and ends at 100; the middle stages are slowest.
pub const PROCESSING_STEPS: [ProcessingStep; 7] = [
    step(10, "Analisando sua foto...", 500),
    step(30, "Detectando corpo e postura...", 800),
    step(50, "Segmentando a roupa...", 1100),
    step(70, "Ajustando tamanho e perspectiva...", 1100),
    step(85, "Aplicando iluminação realista...", 900),
    step(95, "Finalizando resultado...", 600),
    step(100, "Pronto! Seu look está incrível!", 400),
];

pub const STOCK_RESULT_IMAGES: [&str; 4] = [
    "https://images.unsplash.com/photo-1441986300917-64674bd600d8?w=400&h=600&fit=crop",
    "https://images.unsplash.com/photo-1490481651871-ab68de25d43d?w=400&h=600&fit=crop",
    "https://images.unsplash.com/photo-1483985988355-763728e1935b?w=400&h=600&fit=crop",
    "https://images.unsplash.com/photo-1529139574466-a303027c1d8b?w=400&h=600&fit=crop",
];

/// Background-free variant of a stock result URL.
pub fn transparent_variant(result_url: &str) -> String {
    format!("{result_url}&bg=transparent")
}
