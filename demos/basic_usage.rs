// ============================================================================
// Basic Usage Example
// ============================================================================

use pricing_kernel::prelude::*;

fn main() {
    println!("=== Pricing Kernel Example ===\n");

    let spot = Wad::from_integer(1000).unwrap();
    let vol: Wad = "0.6".parse().unwrap();
    let rate: SignedWad = "0.05".parse().unwrap();
    let sixty_days = 60 * 86_400;

    println!("Underlying at {}, vol 60%, rate 5%, 60 days to expiry\n", spot);

    // Risk-free future price
    let forward = future_price(spot, sixty_days, rate).unwrap();
    println!("Future price: {}\n", forward);

    // Price a small strike ladder
    println!("{:>8}  {:>24}  {:>24}", "strike", "call", "put");
    for strike_int in [900u128, 950, 980, 1000, 1050, 1100] {
        let params = OptionParams::new(
            spot,
            Wad::from_integer(strike_int).unwrap(),
            sixty_days,
            vol,
            rate,
        );
        let call = call_price(&params).unwrap();
        let put = put_price(&params).unwrap();
        println!("{:>8}  {:>24}  {:>24}", strike_int, call, put);
    }

    // Greeks at the 980 strike
    let params = OptionParams::new(
        spot,
        Wad::from_integer(980).unwrap(),
        sixty_days,
        vol,
        rate,
    );
    let d = delta(&params).unwrap();
    println!("\n=== Greeks (strike 980) ===");
    println!("call delta: {}", d.call);
    println!("put delta:  {}", d.put);
    println!("gamma:      {}", gamma(&params).unwrap());
    println!("vega:       {}", vega(&params).unwrap());
    let t = theta(&params).unwrap();
    println!("call theta: {}", t.call);
    println!("put theta:  {}", t.put);

    // Domain validation is a hard stop
    let rejected = OptionParams::new(Wad::ZERO, Wad::ZERO, 0, vol, rate);
    println!("\nRejected call: {}", call_price(&rejected).unwrap_err());
}
