//! addcdiv 기반 저정밀 Adam 스타일 업데이트 데모
//!
//! 16비트 파라미터에 lr·m/√v 업데이트를 적용할 때, 나눗셈·스케일링을
//! 고정밀로 끝낸 뒤 확률적 반올림 한 번으로 끝내는 경로를 보여준다.

use half::bf16;
use ndarray::{ArrayD, IxDyn};
use sr_tensor::StochasticAdder;

fn bf16_array(values: Vec<f64>) -> ArrayD<bf16> {
    let n = values.len();
    ArrayD::from_shape_vec(IxDyn(&[n]), values.into_iter().map(bf16::from_f64).collect()).unwrap()
}

fn main() {
    env_logger::init();

    println!("🧮 addcdiv 저정밀 업데이트 데모\n");

    let n = 8;
    let lr = 1e-3;

    // 파라미터와 Adam 모멘트 (데모용 고정값)
    let mut params = bf16_array(vec![1.0; n]);
    let m = bf16_array((0..n).map(|i| 0.5 + 0.1 * i as f64).collect());
    let v_sqrt = bf16_array(vec![1.0; n]);

    let adder = StochasticAdder::<bf16>::with_seed(42);

    // param ← param - lr·m/√v 를 100 스텝
    for _ in 0..100 {
        params = adder.addcdiv(&params, &m, &v_sqrt, -lr, true).unwrap();
    }

    println!("업데이트 100 스텝 후 파라미터 (시작값 1.0):");
    for i in 0..n {
        let expected = 1.0 - 100.0 * lr * (0.5 + 0.1 * i as f64);
        println!(
            "  param[{}] = {:.6} (고정밀 기대값 {:.6})",
            i,
            params[[i]].to_f64(),
            expected
        );
    }
    println!("\nbf16 ULP보다 작은 업데이트도 확률적 반올림 덕분에 평균적으로 반영된다");
}
