//! 저정밀 정체 vs 확률적 반올림 누적 데모

use half::bf16;
use sr_tensor::StochasticAdder;

fn main() {
    env_logger::init();

    println!("🎲 확률적 반올림 덧셈 데모 (bf16)\n");
    println!("{}", "=".repeat(50));

    // bf16에서 1.0의 ULP는 2^-7, 업데이트는 그 절반
    let step = 2f64.powi(-8);
    let steps = 1000;
    let exact = 1.0 + steps as f64 * step;

    // 1. 결정적 최근접 반올림: 업데이트가 전부 버려진다
    let b = bf16::from_f64(step);
    let mut det = bf16::from_f64(1.0);
    for _ in 0..steps {
        det = det + b;
    }
    println!("📉 결정적 덧셈   : {} (업데이트 {}회가 모두 소실)", det, steps);

    // 2. 확률적 반올림 (편향 모드): 기댓값이 정확한 합과 같다
    let adder = StochasticAdder::<bf16>::with_seed(0x5EED);
    let mut sto = bf16::from_f64(1.0);
    for i in 0..steps {
        sto = adder.add_scalar(sto, b, i as u64, true);
    }
    println!("📈 확률적 덧셈   : {}", sto);
    println!("🎯 정확한 합     : {}", exact);

    // 3. 절반 ULP 한 번의 추첨 빈도
    println!("\n{}", "=".repeat(50));
    println!("절반 ULP 덧셈의 상향 반올림 빈도 (시드 10,000개):");
    let a = bf16::from_f64(1.0);
    let upper = 1.0 + 2f64.powi(-7);
    let mut stepped = 0usize;
    let n = 10_000u64;
    for seed in 0..n {
        let r = StochasticAdder::<bf16>::with_seed(seed).add_scalar(a, b, 0, true);
        if r.to_f64() == upper {
            stepped += 1;
        }
    }
    println!("  {} / {} = {:.4} (이론값 0.5)", stepped, n, stepped as f64 / n as f64);
}
