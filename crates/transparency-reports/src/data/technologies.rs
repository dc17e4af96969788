//! Algorand Technologies disclosures (R1..R7)

use crate::store::Disclosure::Number as N;
use crate::store::LoanStatus::{Outstanding, Repaid};
use crate::store::{CategoryDef, Issue, LoanEntry, NOT_REPORTED as NR, RawMetric, SubCategoryDef};

pub static CATEGORIES: &[CategoryDef] = &[
    CategoryDef {
        name: "Token Holdings",
        metrics: &[
            RawMetric {
                name: "Team Allocation",
                values: &[
                    ("R1", N(1_420.0)),
                    ("R2", N(1_380.0)),
                    ("R3", N(1_330.0)),
                    ("R4", N(1_275.0)),
                    ("R5", N(1_210.0)),
                    ("R6", N(1_150.0)),
                    ("R7", N(1_095.0)),
                ],
            },
            RawMetric {
                name: "Investor Allocation",
                values: &[
                    ("R1", N(980.0)),
                    ("R2", N(930.0)),
                    ("R3", N(875.0)),
                    ("R4", NR),
                    ("R5", N(760.0)),
                    ("R6", N(705.0)),
                    ("R7", N(650.0)),
                ],
            },
            RawMetric {
                name: "Treasury",
                values: &[("R3", N(310.0)), ("R4", N(295.0)), ("R5", N(280.0)), ("R6", N(270.0)), ("R7", N(262.0))],
            },
        ],
        sub_categories: &[],
        total: true,
        prune_empty_subcategories: false,
    },
    CategoryDef {
        name: "Expenses (USD M)",
        metrics: &[],
        sub_categories: &[
            SubCategoryDef {
                name: "Engineering",
                metrics: &[
                    RawMetric {
                        name: "Research & Development",
                        values: &[
                            ("R1", N(-14.5)),
                            ("R2", N(-17.2)),
                            ("R3", N(-21.0)),
                            ("R4", N(-24.3)),
                            ("R5", N(-23.1)),
                            ("R6", N(-20.8)),
                            ("R7", N(-19.4)),
                        ],
                    },
                    RawMetric {
                        name: "Infrastructure",
                        values: &[
                            ("R2", N(-1.1)),
                            ("R3", N(-1.6)),
                            ("R4", N(-2.0)),
                            ("R5", NR),
                            ("R6", N(-2.3)),
                            ("R7", N(-2.2)),
                        ],
                    },
                ],
                total: true,
            },
            SubCategoryDef {
                name: "Corporate",
                metrics: &[
                    RawMetric {
                        name: "General & Administrative",
                        values: &[
                            ("R1", N(-4.0)),
                            ("R2", N(-4.6)),
                            ("R3", N(-5.5)),
                            ("R4", N(-6.1)),
                            ("R5", N(-5.8)),
                            ("R6", N(-5.2)),
                            ("R7", N(-4.9)),
                        ],
                    },
                    RawMetric {
                        name: "Sales / Marketing",
                        values: &[("R1", N(-2.2)), ("R2", N(-2.9)), ("R3", N(-3.8)), ("R4", N(-4.4)), ("R5", N(-3.1))],
                    },
                ],
                total: true,
            },
            SubCategoryDef {
                name: "Restructuring",
                metrics: &[RawMetric {
                    name: "Severance",
                    values: &[("R6", NR), ("R7", NR)],
                }],
                total: false,
            },
        ],
        total: true,
        prune_empty_subcategories: false,
    },
    CategoryDef {
        name: "Funding",
        metrics: &[
            RawMetric {
                name: "Equity Raised (USD M)",
                values: &[("R1", N(0.0)), ("R2", N(20.0)), ("R3", N(0.0)), ("R4", N(0.0)), ("R5", N(0.0))],
            },
            RawMetric {
                name: "Token Sales",
                values: &[("R1", N(12.0)), ("R2", N(8.5)), ("R3", N(6.0)), ("R4", NR), ("R5", N(3.5))],
            },
        ],
        sub_categories: &[SubCategoryDef {
            name: "Strategic Rounds",
            metrics: &[RawMetric {
                name: "Strategic Investment (USD M)",
                values: &[("R6", NR), ("R7", NR)],
            }],
            total: false,
        }],
        total: false,
        prune_empty_subcategories: true,
    },
];

/// Convertible notes extended to ecosystem companies (USD M)
pub static LOANS: &[LoanEntry] = &[
    LoanEntry {
        report: "R3",
        counterparty: "Wallet Partner",
        amount: N(1.5),
        status: Repaid,
    },
    LoanEntry {
        report: "R5",
        counterparty: "Node Hosting Provider",
        amount: NR,
        status: Outstanding,
    },
];

pub static ISSUES: &[Issue] = &[
    Issue {
        report: "R4",
        title: "Investor allocation not itemized",
        note: "Investor token holdings were listed without a figure.",
    },
    Issue {
        report: "R6",
        title: "Strategic round terms withheld",
        note: "Strategic investment amounts marked N/R for two consecutive reports.",
    },
];
