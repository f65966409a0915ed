//! Static criteria tables for the three study designs.
//!
//! Questions, option keys, option labels, and star weights are the published
//! instrument wording. Option order is presentation order.

use super::{AnswerOption, Criterion, DomainCriteria};
use crate::core::DomainName;

pub(super) static COHORT: &[DomainCriteria] = &[
    DomainCriteria {
        name: DomainName::Selection,
        criteria: &[
            Criterion {
                key: "representativeness",
                question: "1. Representativeness of the exposed cohort",
                options: &[
                    AnswerOption {
                        key: "truly_representative",
                        label: "Truly representative of the average population in the community (\u{2605})",
                        stars: 1,
                    },
                    AnswerOption {
                        key: "somewhat_representative",
                        label: "Somewhat representative of the average population in the community (\u{2605})",
                        stars: 1,
                    },
                    AnswerOption {
                        key: "selected_group",
                        label: "Selected group of users (e.g., nurses, volunteers)",
                        stars: 0,
                    },
                    AnswerOption {
                        key: "no_description",
                        label: "No description of the derivation of the cohort",
                        stars: 0,
                    },
                ],
            },
            Criterion {
                key: "selection_nonexposed",
                question: "2. Selection of the non-exposed cohort",
                options: &[
                    AnswerOption {
                        key: "same_community",
                        label: "Drawn from the same community as the exposed cohort (\u{2605})",
                        stars: 1,
                    },
                    AnswerOption {
                        key: "different_source",
                        label: "Drawn from a different source",
                        stars: 0,
                    },
                    AnswerOption {
                        key: "no_description",
                        label: "No description of the derivation of the non-exposed cohort",
                        stars: 0,
                    },
                ],
            },
            Criterion {
                key: "ascertainment_exposure",
                question: "3. Ascertainment of exposure",
                options: &[
                    AnswerOption {
                        key: "secure_record",
                        label: "Secure record (e.g., surgical records) (\u{2605})",
                        stars: 1,
                    },
                    AnswerOption {
                        key: "structured_interview",
                        label: "Structured interview where blind to case/control status (\u{2605})",
                        stars: 1,
                    },
                    AnswerOption {
                        key: "written_self_report",
                        label: "Written self-report",
                        stars: 0,
                    },
                    AnswerOption {
                        key: "no_description",
                        label: "No description",
                        stars: 0,
                    },
                ],
            },
            Criterion {
                key: "outcome_not_present",
                question: "4. Demonstration that outcome of interest was not present at start of study",
                options: &[
                    AnswerOption {
                        key: "yes",
                        label: "Yes (\u{2605})",
                        stars: 1,
                    },
                    AnswerOption {
                        key: "no",
                        label: "No",
                        stars: 0,
                    },
                ],
            },
        ],
    },
    DomainCriteria {
        name: DomainName::Comparability,
        criteria: &[Criterion {
            key: "comparability",
            question: "5. Comparability of cohorts on the basis of the design or analysis",
            options: &[
                AnswerOption {
                    key: "most_important",
                    label: "Study controls for the most important factor (\u{2605})",
                    stars: 1,
                },
                AnswerOption {
                    key: "additional_factor",
                    label: "Study controls for any additional factor (\u{2605}\u{2605})",
                    stars: 2,
                },
                AnswerOption {
                    key: "no_control",
                    label: "No control for confounding factors",
                    stars: 0,
                },
            ],
        }],
    },
    DomainCriteria {
        name: DomainName::Outcome,
        criteria: &[
            Criterion {
                key: "assessment_outcome",
                question: "6. Assessment of outcome",
                options: &[
                    AnswerOption {
                        key: "independent_blind",
                        label: "Independent blind assessment (\u{2605})",
                        stars: 1,
                    },
                    AnswerOption {
                        key: "record_linkage",
                        label: "Record linkage (\u{2605})",
                        stars: 1,
                    },
                    AnswerOption {
                        key: "self_report",
                        label: "Self-report",
                        stars: 0,
                    },
                    AnswerOption {
                        key: "no_description",
                        label: "No description",
                        stars: 0,
                    },
                ],
            },
            Criterion {
                key: "adequate_followup_length",
                question: "7. Was follow-up long enough for outcomes to occur",
                options: &[
                    AnswerOption {
                        key: "yes",
                        label: "Yes (\u{2605})",
                        stars: 1,
                    },
                    AnswerOption {
                        key: "no",
                        label: "No",
                        stars: 0,
                    },
                ],
            },
            Criterion {
                key: "adequacy_followup",
                question: "8. Adequacy of follow up of cohorts",
                options: &[
                    AnswerOption {
                        key: "complete_followup",
                        label: "Complete follow up - all subjects accounted for (\u{2605})",
                        stars: 1,
                    },
                    AnswerOption {
                        key: "small_loss",
                        label: "Subjects lost to follow up unlikely to introduce bias - small number lost (\u{2605})",
                        stars: 1,
                    },
                    AnswerOption {
                        key: "high_loss",
                        label: "High rate of follow up but no description of those lost",
                        stars: 0,
                    },
                    AnswerOption {
                        key: "no_statement",
                        label: "No statement",
                        stars: 0,
                    },
                ],
            },
        ],
    },
];

pub(super) static CASE_CONTROL: &[DomainCriteria] = &[
    DomainCriteria {
        name: DomainName::Selection,
        criteria: &[
            Criterion {
                key: "case_definition",
                question: "1. Is the case definition adequate?",
                options: &[
                    AnswerOption {
                        key: "independent_validation",
                        label: "Yes, with independent validation (\u{2605})",
                        stars: 1,
                    },
                    AnswerOption {
                        key: "record_linkage",
                        label: "Yes, e.g., record linkage or based on self-reports",
                        stars: 0,
                    },
                    AnswerOption {
                        key: "no_description",
                        label: "No description",
                        stars: 0,
                    },
                ],
            },
            Criterion {
                key: "representativeness_cases",
                question: "2. Representativeness of the cases",
                options: &[
                    AnswerOption {
                        key: "consecutive_series",
                        label: "Consecutive or obviously representative series of cases (\u{2605})",
                        stars: 1,
                    },
                    AnswerOption {
                        key: "potential_selection",
                        label: "Potential for selection biases or not stated",
                        stars: 0,
                    },
                ],
            },
            Criterion {
                key: "selection_controls",
                question: "3. Selection of Controls",
                options: &[
                    AnswerOption {
                        key: "community_controls",
                        label: "Community controls (\u{2605})",
                        stars: 1,
                    },
                    AnswerOption {
                        key: "hospital_controls",
                        label: "Hospital controls",
                        stars: 0,
                    },
                    AnswerOption {
                        key: "no_description",
                        label: "No description",
                        stars: 0,
                    },
                ],
            },
            Criterion {
                key: "definition_controls",
                question: "4. Definition of Controls",
                options: &[
                    AnswerOption {
                        key: "no_history",
                        label: "No history of disease (endpoint) (\u{2605})",
                        stars: 1,
                    },
                    AnswerOption {
                        key: "no_description",
                        label: "No description of source",
                        stars: 0,
                    },
                ],
            },
        ],
    },
    DomainCriteria {
        name: DomainName::Comparability,
        criteria: &[Criterion {
            key: "comparability",
            question: "5. Comparability of cases and controls on the basis of the design or analysis",
            options: &[
                AnswerOption {
                    key: "most_important",
                    label: "Study controls for the most important factor (\u{2605})",
                    stars: 1,
                },
                AnswerOption {
                    key: "additional_factor",
                    label: "Study controls for any additional factor (\u{2605}\u{2605})",
                    stars: 2,
                },
                AnswerOption {
                    key: "no_control",
                    label: "No control for confounding factors",
                    stars: 0,
                },
            ],
        }],
    },
    DomainCriteria {
        name: DomainName::Exposure,
        criteria: &[
            Criterion {
                key: "ascertainment_exposure",
                question: "6. Ascertainment of exposure",
                options: &[
                    AnswerOption {
                        key: "secure_record",
                        label: "Secure record (e.g., surgical records) (\u{2605})",
                        stars: 1,
                    },
                    AnswerOption {
                        key: "structured_interview",
                        label: "Structured interview where blind to case/control status (\u{2605})",
                        stars: 1,
                    },
                    AnswerOption {
                        key: "interview_not_blinded",
                        label: "Interview not blinded to case/control status",
                        stars: 0,
                    },
                    AnswerOption {
                        key: "written_self_report",
                        label: "Written self-report or medical record only",
                        stars: 0,
                    },
                    AnswerOption {
                        key: "no_description",
                        label: "No description",
                        stars: 0,
                    },
                ],
            },
            Criterion {
                key: "same_method",
                question: "7. Same method of ascertainment for cases and controls",
                options: &[
                    AnswerOption {
                        key: "yes",
                        label: "Yes (\u{2605})",
                        stars: 1,
                    },
                    AnswerOption {
                        key: "no",
                        label: "No",
                        stars: 0,
                    },
                ],
            },
            Criterion {
                key: "non_response_rate",
                question: "8. Non-Response rate",
                options: &[
                    AnswerOption {
                        key: "same_rate",
                        label: "Same rate for both groups (\u{2605})",
                        stars: 1,
                    },
                    AnswerOption {
                        key: "non_respondents",
                        label: "Non-respondents described",
                        stars: 0,
                    },
                    AnswerOption {
                        key: "rate_different",
                        label: "Rate different and no designation",
                        stars: 0,
                    },
                ],
            },
        ],
    },
];

pub(super) static CROSS_SECTIONAL: &[DomainCriteria] = &[
    DomainCriteria {
        name: DomainName::Selection,
        criteria: &[
            Criterion {
                key: "representativeness",
                question: "1. Representativeness of the sample",
                options: &[
                    AnswerOption {
                        key: "truly_representative",
                        label: "Truly representative of the average population (\u{2605})",
                        stars: 1,
                    },
                    AnswerOption {
                        key: "somewhat_representative",
                        label: "Somewhat representative of the average population (\u{2605})",
                        stars: 1,
                    },
                    AnswerOption {
                        key: "selected_group",
                        label: "Selected group of users",
                        stars: 0,
                    },
                    AnswerOption {
                        key: "no_description",
                        label: "No description of the sampling strategy",
                        stars: 0,
                    },
                ],
            },
            Criterion {
                key: "sample_size",
                question: "2. Sample size",
                options: &[
                    AnswerOption {
                        key: "justified",
                        label: "Justified and satisfactory (\u{2605})",
                        stars: 1,
                    },
                    AnswerOption {
                        key: "not_justified",
                        label: "Not justified",
                        stars: 0,
                    },
                ],
            },
            Criterion {
                key: "non_respondents",
                question: "3. Non-respondents",
                options: &[
                    AnswerOption {
                        key: "comparability",
                        label: "Comparability between respondents and non-respondents characteristics is established (\u{2605})",
                        stars: 1,
                    },
                    AnswerOption {
                        key: "response_rate",
                        label: "Response rate satisfactory or non-respondents described",
                        stars: 0,
                    },
                    AnswerOption {
                        key: "no_description",
                        label: "No description of non-respondents",
                        stars: 0,
                    },
                ],
            },
            Criterion {
                key: "exposure_outcome",
                question: "4. Ascertainment of the exposure (or risk factor)",
                options: &[
                    AnswerOption {
                        key: "validated_tool",
                        label: "Validated measurement tool (\u{2605})",
                        stars: 1,
                    },
                    AnswerOption {
                        key: "non_validated",
                        label: "Non-validated measurement tool or unclear",
                        stars: 0,
                    },
                ],
            },
        ],
    },
    DomainCriteria {
        name: DomainName::Comparability,
        criteria: &[Criterion {
            key: "comparability",
            question: "5. The subjects in different outcome groups are comparable",
            options: &[
                AnswerOption {
                    key: "most_important",
                    label: "Study controls for the most important confounding factor (\u{2605})",
                    stars: 1,
                },
                AnswerOption {
                    key: "additional_factor",
                    label: "Study controls for additional confounding factors (\u{2605}\u{2605})",
                    stars: 2,
                },
                AnswerOption {
                    key: "no_control",
                    label: "No control for confounding factors",
                    stars: 0,
                },
            ],
        }],
    },
    DomainCriteria {
        name: DomainName::Outcome,
        criteria: &[
            Criterion {
                key: "assessment_outcome",
                question: "6. Assessment of the outcome",
                options: &[
                    AnswerOption {
                        key: "independent_blind",
                        label: "Independent blind assessment (\u{2605})",
                        stars: 1,
                    },
                    AnswerOption {
                        key: "record_linkage",
                        label: "Record linkage (\u{2605})",
                        stars: 1,
                    },
                    AnswerOption {
                        key: "self_report",
                        label: "Self-report",
                        stars: 0,
                    },
                    AnswerOption {
                        key: "no_description",
                        label: "No description",
                        stars: 0,
                    },
                ],
            },
            Criterion {
                key: "statistical_test",
                question: "7. Statistical test",
                options: &[
                    AnswerOption {
                        key: "appropriate",
                        label: "The statistical test used to analyze the data is clearly described and appropriate (\u{2605})",
                        stars: 1,
                    },
                    AnswerOption {
                        key: "inappropriate",
                        label: "The statistical test is not appropriate, not described or incomplete",
                        stars: 0,
                    },
                ],
            },
        ],
    },
];
