
use super::*;

pub const RESULT_MARGIN: f64 = 0.000001f64;

lazy_static! {
    static ref SMALL_PARAMS: HyperParams = HyperParams {
        num_inputs: 3,
        layer_widths: vec![4, 4, 2],
    };
}

fn init_logging() {
    let _ = env_logger::Builder::from_default_env()
        .is_test(true)
        .try_init();
}
