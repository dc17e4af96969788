//! Algorand Foundation disclosures (R1..R18)

use crate::store::Disclosure::Number as N;
use crate::store::LoanStatus::{Outstanding, Repaid, WrittenOff};
use crate::store::{CategoryDef, Issue, LoanEntry, NOT_REPORTED as NR, RawMetric, SubCategoryDef};

pub static CATEGORIES: &[CategoryDef] = &[
    CategoryDef {
        name: "Token Supply",
        metrics: &[
            RawMetric {
                name: "Circulating Supply",
                values: &[
                    ("R1", N(1_100.0)),
                    ("R2", N(1_400.0)),
                    ("R3", N(2_100.0)),
                    ("R4", N(2_900.0)),
                    ("R5", N(3_400.0)),
                    ("R6", N(3_800.0)),
                    ("R7", N(4_300.0)),
                    ("R8", N(4_800.0)),
                    ("R9", N(5_400.0)),
                    ("R10", N(6_100.0)),
                    ("R11", N(6_500.0)),
                    ("R12", N(6_800.0)),
                    ("R13", N(7_000.0)),
                    ("R14", N(7_100.0)),
                    ("R15", N(7_200.0)),
                    ("R16", N(7_400.0)),
                    ("R17", N(7_600.0)),
                    ("R18", N(7_800.0)),
                ],
            },
            RawMetric {
                name: "Foundation Holdings",
                values: &[
                    ("R1", N(3_900.0)),
                    ("R2", N(3_750.0)),
                    ("R3", N(3_600.0)),
                    ("R4", N(3_450.0)),
                    ("R5", N(3_300.0)),
                    ("R6", N(3_150.0)),
                    ("R7", N(3_000.0)),
                    ("R8", N(2_860.0)),
                    ("R9", N(2_720.0)),
                    ("R10", N(2_600.0)),
                    ("R11", N(2_480.0)),
                    ("R12", N(2_370.0)),
                    ("R13", N(2_260.0)),
                    ("R14", N(2_160.0)),
                    ("R15", N(2_070.0)),
                    ("R16", N(1_980.0)),
                    ("R17", N(1_900.0)),
                    ("R18", N(1_820.0)),
                ],
            },
            RawMetric {
                name: "Locked Supply",
                values: &[
                    ("R1", N(2_400.0)),
                    ("R2", N(2_250.0)),
                    ("R3", N(2_050.0)),
                    ("R4", N(1_800.0)),
                    ("R5", N(1_600.0)),
                    ("R6", N(1_450.0)),
                    ("R7", N(1_300.0)),
                    ("R8", N(1_150.0)),
                    ("R9", N(1_000.0)),
                    ("R10", NR),
                ],
            },
        ],
        sub_categories: &[],
        total: false,
        prune_empty_subcategories: false,
    },
    CategoryDef {
        name: "Outflows",
        metrics: &[],
        sub_categories: &[
            SubCategoryDef {
                name: "Ecosystem",
                metrics: &[
                    RawMetric {
                        name: "Ecosystem Grants",
                        values: &[
                            ("R3", N(-4.2)),
                            ("R4", N(-6.8)),
                            ("R5", N(-9.1)),
                            ("R6", N(-11.4)),
                            ("R7", N(-15.0)),
                            ("R8", N(-18.7)),
                            ("R9", N(-21.3)),
                            ("R10", N(-24.9)),
                            ("R11", N(-22.0)),
                            ("R12", N(-19.6)),
                            ("R13", N(-17.2)),
                            ("R14", N(-16.8)),
                            ("R15", N(-14.1)),
                            ("R16", N(-12.9)),
                            ("R17", N(-11.5)),
                            ("R18", N(-10.2)),
                        ],
                    },
                    RawMetric {
                        name: "Developer Incentives",
                        values: &[
                            ("R8", N(-2.5)),
                            ("R9", N(-3.1)),
                            ("R10", N(-4.0)),
                            ("R11", NR),
                            ("R12", N(-5.2)),
                            ("R13", N(-5.9)),
                            ("R14", N(-6.3)),
                            ("R15", N(-6.0)),
                            ("R16", N(-5.4)),
                            ("R17", N(-4.8)),
                            ("R18", N(-4.4)),
                        ],
                    },
                ],
                total: true,
            },
            SubCategoryDef {
                name: "Governance & Rewards",
                metrics: &[
                    RawMetric {
                        name: "Participation Rewards",
                        values: &[
                            ("R1", N(-18.0)),
                            ("R2", N(-24.5)),
                            ("R3", N(-31.0)),
                            ("R4", N(-36.2)),
                            ("R5", N(-40.8)),
                            ("R6", N(-42.1)),
                            ("R7", N(-39.7)),
                            ("R8", N(-35.5)),
                            ("R9", N(-30.2)),
                            ("R10", N(-24.0)),
                            ("R11", N(-12.6)),
                            ("R12", N(0.0)),
                        ],
                    },
                    RawMetric {
                        name: "Governance Rewards",
                        values: &[
                            ("R11", N(-45.0)),
                            ("R12", N(-70.0)),
                            ("R13", N(-71.5)),
                            ("R14", N(-68.0)),
                            ("R15", N(-60.0)),
                            ("R16", N(-55.0)),
                            ("R17", N(-52.5)),
                            ("R18", N(-50.0)),
                        ],
                    },
                ],
                total: false,
            },
            SubCategoryDef {
                name: "Operations",
                metrics: &[
                    RawMetric {
                        name: "Operating Expenses",
                        values: &[
                            ("R1", N(-1.2)),
                            ("R2", N(-1.4)),
                            ("R3", N(-1.9)),
                            ("R4", N(-2.2)),
                            ("R5", NR),
                            ("R6", N(-2.8)),
                            ("R7", N(-3.1)),
                            ("R8", N(-3.3)),
                            ("R9", N(-3.6)),
                            ("R10", N(-3.9)),
                            ("R11", N(-4.1)),
                            ("R12", N(-4.4)),
                            ("R13", N(-4.2)),
                            ("R14", N(-4.0)),
                            ("R15", N(-3.8)),
                            ("R16", N(-3.7)),
                            ("R17", N(-3.5)),
                            ("R18", N(-3.4)),
                        ],
                    },
                    RawMetric {
                        name: "Legal / Compliance",
                        values: &[
                            ("R6", N(-0.4)),
                            ("R7", N(-0.5)),
                            ("R8", N(-0.5)),
                            ("R9", N(-0.7)),
                            ("R10", N(-0.8)),
                            ("R11", N(-0.9)),
                            ("R12", N(-1.1)),
                            ("R13", N(-1.0)),
                            ("R14", N(-0.9)),
                            ("R15", N(-0.9)),
                            ("R16", N(-0.8)),
                            ("R17", N(-0.8)),
                            ("R18", N(-0.7)),
                        ],
                    },
                ],
                total: true,
            },
            SubCategoryDef {
                name: "Relay Node Program",
                metrics: &[RawMetric {
                    name: "Relay Node Rewards",
                    values: &[("R14", NR), ("R15", NR), ("R16", NR), ("R17", NR), ("R18", NR)],
                }],
                total: false,
            },
        ],
        total: true,
        prune_empty_subcategories: true,
    },
    CategoryDef {
        name: "Balance Sheet",
        metrics: &[],
        sub_categories: &[
            SubCategoryDef {
                name: "Pools",
                metrics: &[
                    RawMetric {
                        name: "Community & Governance",
                        values: &[
                            ("R1", N(1_750.0)),
                            ("R2", N(1_700.0)),
                            ("R3", N(1_640.0)),
                            ("R4", N(1_580.0)),
                            ("R5", N(1_520.0)),
                            ("R6", N(1_460.0)),
                            ("R7", N(1_400.0)),
                            ("R8", N(1_340.0)),
                            ("R9", N(1_280.0)),
                            ("R10", N(1_220.0)),
                            ("R11", N(1_160.0)),
                            ("R12", N(1_090.0)),
                            ("R13", N(1_020.0)),
                            ("R14", N(950.0)),
                            ("R15", N(890.0)),
                            ("R16", N(835.0)),
                            ("R17", N(780.0)),
                            ("R18", N(730.0)),
                        ],
                    },
                    RawMetric {
                        name: "Ecosystem Support",
                        values: &[
                            ("R1", N(1_250.0)),
                            ("R2", N(1_210.0)),
                            ("R3", N(1_170.0)),
                            ("R4", N(1_130.0)),
                            ("R5", N(1_090.0)),
                            ("R6", N(1_050.0)),
                            ("R7", N(1_000.0)),
                            ("R8", N(955.0)),
                            ("R9", N(910.0)),
                            ("R10", N(870.0)),
                            ("R11", N(835.0)),
                            ("R12", N(800.0)),
                            ("R13", N(770.0)),
                            ("R14", N(745.0)),
                            ("R15", N(720.0)),
                            ("R16", N(695.0)),
                            ("R17", N(675.0)),
                            ("R18", N(655.0)),
                        ],
                    },
                    RawMetric {
                        name: "Foundation Endowment",
                        values: &[
                            ("R1", N(900.0)),
                            ("R2", N(840.0)),
                            ("R3", N(790.0)),
                            ("R4", N(740.0)),
                            ("R5", N(690.0)),
                            ("R6", N(640.0)),
                            ("R7", N(600.0)),
                            ("R8", N(565.0)),
                            ("R9", N(530.0)),
                            ("R10", N(510.0)),
                            ("R11", N(485.0)),
                            ("R12", N(480.0)),
                            ("R13", N(470.0)),
                            ("R14", N(465.0)),
                            ("R15", N(460.0)),
                            ("R16", N(450.0)),
                            ("R17", N(445.0)),
                            ("R18", N(435.0)),
                        ],
                    },
                ],
                total: true,
            },
            SubCategoryDef {
                name: "Fiat (USD M)",
                metrics: &[
                    RawMetric {
                        name: "Cash & Equivalents",
                        values: &[
                            ("R5", N(48.0)),
                            ("R6", N(61.5)),
                            ("R7", N(95.0)),
                            ("R8", N(120.3)),
                            ("R9", N(142.8)),
                            ("R10", N(150.1)),
                            ("R11", N(138.4)),
                            ("R12", N(121.0)),
                            ("R13", N(110.6)),
                            ("R14", N(104.2)),
                            ("R15", N(98.7)),
                            ("R16", N(93.5)),
                            ("R17", N(90.0)),
                            ("R18", N(87.2)),
                        ],
                    },
                    RawMetric {
                        name: "Digital Assets",
                        values: &[
                            ("R5", NR),
                            ("R6", NR),
                            ("R7", N(12.0)),
                            ("R8", N(18.4)),
                            ("R9", N(22.9)),
                            ("R10", N(19.5)),
                            ("R11", N(9.8)),
                            ("R12", N(7.1)),
                            ("R13", N(6.5)),
                            ("R14", N(6.9)),
                            ("R15", N(7.4)),
                            ("R16", N(8.0)),
                            ("R17", N(8.6)),
                            ("R18", N(9.3)),
                        ],
                    },
                ],
                total: false,
            },
            SubCategoryDef {
                name: "Loans Receivable",
                metrics: &[RawMetric {
                    name: "Receivables",
                    values: &[("R16", NR), ("R17", NR), ("R18", NR)],
                }],
                total: false,
            },
        ],
        total: false,
        prune_empty_subcategories: false,
    },
    CategoryDef {
        name: "Loans",
        metrics: &[
            RawMetric {
                name: "Loans Outstanding",
                values: &[
                    ("R9", N(150.0)),
                    ("R10", N(210.0)),
                    ("R11", N(240.0)),
                    ("R12", N(235.0)),
                    ("R13", N(220.0)),
                    ("R14", N(198.0)),
                    ("R15", N(175.0)),
                    ("R16", N(160.0)),
                    ("R17", N(142.0)),
                    ("R18", N(130.0)),
                ],
            },
            RawMetric {
                name: "Loans Repaid",
                values: &[
                    ("R11", N(10.0)),
                    ("R12", N(15.0)),
                    ("R13", N(18.0)),
                    ("R14", N(22.0)),
                    ("R15", N(23.0)),
                    ("R16", N(15.0)),
                    ("R17", N(18.0)),
                    ("R18", N(12.0)),
                ],
            },
            RawMetric {
                name: "Loans Written Off",
                values: &[("R14", N(0.0)), ("R15", N(0.0)), ("R16", N(4.5)), ("R17", NR), ("R18", N(2.0))],
            },
        ],
        sub_categories: &[],
        total: true,
        prune_empty_subcategories: false,
    },
];

/// Itemized loan ledger behind the aggregate Loans metrics (millions of ALGO)
pub static LOANS: &[LoanEntry] = &[
    LoanEntry {
        report: "R9",
        counterparty: "Market Maker A",
        amount: N(60.0),
        status: Repaid,
    },
    LoanEntry {
        report: "R9",
        counterparty: "Market Maker B",
        amount: N(40.0),
        status: Outstanding,
    },
    LoanEntry {
        report: "R12",
        counterparty: "DeFi Liquidity Program",
        amount: N(35.0),
        status: Outstanding,
    },
    LoanEntry {
        report: "R14",
        counterparty: "Lending Desk (insolvent)",
        amount: N(4.5),
        status: WrittenOff,
    },
    LoanEntry {
        report: "R17",
        counterparty: "Undisclosed",
        amount: NR,
        status: Outstanding,
    },
];

pub static ISSUES: &[Issue] = &[
    Issue {
        report: "R5",
        title: "Operating expenses not reported",
        note: "The quarter lists operating expenses as N/R.",
    },
    Issue {
        report: "R10",
        title: "Locked supply disclosure discontinued",
        note: "Locked supply was reported as N/R and dropped from later reports.",
    },
    Issue {
        report: "R14",
        title: "Counterparty insolvency",
        note: "A lending counterparty became insolvent; part of its loan was written off.",
    },
    Issue {
        report: "R17",
        title: "Loan counterparty withheld",
        note: "A new loan was disclosed without counterparty or amount.",
    },
];
