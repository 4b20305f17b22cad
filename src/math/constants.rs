// ============================================================================
// Kernel Constants
// Precomputed range-reduction constants and coefficient tables
// ============================================================================
//
// All values are 18-decimal fixed point, computed offline at 60-digit
// precision and rounded to the nearest raw unit. They are immutable data:
// changing any of them changes the bit-exact output of every primitive.

use crate::numeric::{SignedWad, Wad};

// ============================================================================
// Exponential
// ============================================================================

/// e = 2.718281828459045235
pub(crate) const E: Wad = Wad::from_raw(2_718_281_828_459_045_235);

/// e^32 = 78962960182680.695160978022635108
pub(crate) const E_POW_32: Wad = Wad::from_raw(78_962_960_182_680_695_160_978_022_635_108);

/// e^(1/32) = 1.031743407499102671
pub(crate) const E_ROOT_32: Wad = Wad::from_raw(1_031_743_407_499_102_671);

/// e^(1/128) = 1.007843097206447978
pub(crate) const E_ROOT_128: Wad = Wad::from_raw(1_007_843_097_206_447_978);

/// Step sizes peeled off the exponent, largest first
pub(crate) const EXP_STEP_32: u128 = 32 * crate::numeric::SCALE;
pub(crate) const EXP_STEP_1_32: u128 = crate::numeric::SCALE / 32;
pub(crate) const EXP_STEP_1_128: u128 = crate::numeric::SCALE / 128;

/// Inputs above this magnitude saturate: ln(2^128 / 10^18) ~= 47.276, so
/// e^x stops being representable just past 47
pub(crate) const EXP_SATURATION_INPUT: Wad = Wad::from_raw(47_000_000_000_000_000_000);

/// Hard rejection bound for the exponential argument
pub(crate) const EXP_MAX_INPUT: Wad = Wad::from_raw(130_000_000_000_000_000_000);

/// 3.0, the Pade anchor: e^r ~= ((r+3)^2 + 3) / ((r-3)^2 + 3)
pub(crate) const THREE: Wad = Wad::from_raw(3_000_000_000_000_000_000);

// ============================================================================
// Logarithm
// ============================================================================

/// 16^(1/32) = 2^(1/8) = 1.090507732665257659, the reduction base
pub(crate) const ROOT_32_OF_16: Wad = Wad::from_raw(1_090_507_732_665_257_659);

/// ln(16^(1/32)) = ln(2)/8 = 0.086643397569993164
pub(crate) const LN_ROOT_32_OF_16: Wad = Wad::from_raw(86_643_397_569_993_164);

/// 2^(1/16) = 1.044273782427413840, the final refinement step
pub(crate) const ROOT_16_OF_2: Wad = Wad::from_raw(1_044_273_782_427_413_840);

/// ln(2^(1/16)) = ln(2)/16 = 0.043321698784996582
pub(crate) const LN_ROOT_16_OF_2: Wad = Wad::from_raw(43_321_698_784_996_582);

/// 1/ln(2) = 1.442695040888963407
pub(crate) const INV_LN_2: SignedWad = SignedWad::from_raw(1_442_695_040_888_963_407);

/// 1/ln(10) = 0.434294481903251828
pub(crate) const INV_LN_10: SignedWad = SignedWad::from_raw(434_294_481_903_251_828);

/// Odd-power series coefficients 1/7, 1/5, 1/3
pub(crate) const SEVENTH: Wad = Wad::from_raw(142_857_142_857_142_857);
pub(crate) const FIFTH: Wad = Wad::from_raw(200_000_000_000_000_000);
pub(crate) const THIRD: Wad = Wad::from_raw(333_333_333_333_333_333);

// ============================================================================
// Square Root
// ============================================================================

/// 100^(1/64) = 1.074607828321317497
pub(crate) const ROOT_64_OF_100: Wad = Wad::from_raw(1_074_607_828_321_317_497);

/// 100^(1/128) = 1.036632928437697997
pub(crate) const ROOT_128_OF_100: Wad = Wad::from_raw(1_036_632_928_437_697_997);

/// 100^(1/256) = 1.018151721718181841
pub(crate) const ROOT_256_OF_100: Wad = Wad::from_raw(1_018_151_721_718_181_841);

/// (100^(1/64))^(2j) for j = 0..31: the even powers divided out of the
/// reduced argument
pub(crate) const SQRT_POW_SQUARES: [u128; 32] = [
    1_000_000_000_000_000_000,
    1_154_781_984_689_458_180,
    1_333_521_432_163_324_026,
    1_539_926_526_059_491_990,
    1_778_279_410_038_922_801,
    2_053_525_026_457_146_075,
    2_371_373_705_661_655_262,
    2_738_419_634_264_361_294,
    3_162_277_660_168_379_332,
    3_651_741_272_548_377_058,
    4_216_965_034_285_822_486,
    4_869_675_251_658_631_149,
    5_623_413_251_903_490_804,
    6_493_816_315_762_113_151,
    7_498_942_093_324_558_273,
    8_659_643_233_600_653_524,
    10_000_000_000_000_000_000,
    11_547_819_846_894_581_797,
    13_335_214_321_633_240_257,
    15_399_265_260_594_919_896,
    17_782_794_100_389_228_012,
    20_535_250_264_571_460_746,
    23_713_737_056_616_552_617,
    27_384_196_342_643_612_942,
    31_622_776_601_683_793_320,
    36_517_412_725_483_770_582,
    42_169_650_342_858_224_857,
    48_696_752_516_586_311_494,
    56_234_132_519_034_908_039,
    64_938_163_157_621_131_513,
    74_989_420_933_245_582_730,
    86_596_432_336_006_535_235,
];

/// (100^(1/64))^j for j = 0..31: the matching square-root multipliers
pub(crate) const SQRT_POW_ROOTS: [u128; 32] = [
    1_000_000_000_000_000_000,
    1_074_607_828_321_317_497,
    1_154_781_984_689_458_180,
    1_240_937_760_751_719_566,
    1_333_521_432_163_324_026,
    1_433_012_570_236_962_742,
    1_539_926_526_059_491_990,
    1_654_817_099_943_181_423,
    1_778_279_410_038_922_801,
    1_910_952_974_970_440_516,
    2_053_525_026_457_146_075,
    2_206_734_069_084_589_800,
    2_371_373_705_661_655_262,
    2_548_296_747_979_346_528,
    2_738_419_634_264_361_294,
    2_942_727_176_209_281_811,
    3_162_277_660_168_379_332,
    3_398_208_328_942_559_372,
    3_651_741_272_548_377_058,
    3_924_189_758_484_535_862,
    4_216_965_034_285_822_486,
    4_531_583_637_600_817_883,
    4_869_675_251_658_631_149,
    5_232_991_146_814_946_881,
    5_623_413_251_903_490_804,
    6_042_963_902_381_328_190,
    6_493_816_315_762_113_151,
    6_978_305_848_598_663_384,
    7_498_942_093_324_558_273,
    8_058_421_877_614_818_170,
    8_659_643_233_600_653_524,
    9_305_720_409_296_989_793,
];

/// Maclaurin coefficients of sqrt(1+u) through the 8th-order term:
/// 1, 1/2, -1/8, 1/16, -5/128, 7/256, -21/1024, 33/2048, -429/32768
pub(crate) const SQRT_MACLAURIN: [i128; 9] = [
    1_000_000_000_000_000_000,
    500_000_000_000_000_000,
    -125_000_000_000_000_000,
    62_500_000_000_000_000,
    -39_062_500_000_000_000,
    27_343_750_000_000_000,
    -20_507_812_500_000_000,
    16_113_281_250_000_000,
    -13_092_041_015_625_000,
];

// ============================================================================
// Error Function / Normal Distribution
// ============================================================================

/// Abramowitz & Stegun 7.1.26 rational weight: 0.3275911
pub(crate) const ERF_P: Wad = Wad::from_raw(327_591_100_000_000_000);

/// Abramowitz & Stegun 7.1.26 polynomial coefficients a1..a5
pub(crate) const ERF_A: [i128; 5] = [
    254_829_592_000_000_000,
    -284_496_736_000_000_000,
    1_421_413_741_000_000_000,
    -1_453_152_027_000_000_000,
    1_061_405_429_000_000_000,
];

/// |z| at which the erf tail falls below one raw unit; also keeps z^2
/// inside the exponential's domain
pub(crate) const ERF_SATURATION: Wad = Wad::from_raw(6_500_000_000_000_000_000);

/// |x| at which the normal density falls below one raw unit
pub(crate) const PDF_ZERO_BOUND: Wad = Wad::from_raw(16_000_000_000_000_000_000);

/// sqrt(2) = 1.414213562373095049
pub(crate) const SQRT_2: Wad = Wad::from_raw(1_414_213_562_373_095_049);

/// sqrt(2*pi) = 2.506628274631000502
pub(crate) const SQRT_2_PI: Wad = Wad::from_raw(2_506_628_274_631_000_502);
