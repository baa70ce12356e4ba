//! The shipped content. Hand-maintained; keep puzzle canonical answers
//! phrased with the scorer's domain vocabulary so keyword matching works.

use quizfi_core::model::{
    Difficulty, FinancialTip, Puzzle, PuzzleDifficulty, PuzzleKind, PuzzleValidationError, Quiz,
    QuizCategory, QuizQuestion, QuizValidationError, TipCategory,
};

fn strings<const N: usize>(items: [&str; N]) -> Vec<String> {
    items.into_iter().map(str::to_owned).collect()
}

pub(super) fn quizzes() -> Result<Vec<Quiz>, QuizValidationError> {
    Ok(vec![
        Quiz::new(
            "Budgeting Basics",
            QuizCategory::Budgeting,
            vec![
                QuizQuestion::new(
                    "What percentage of your income should ideally go to housing costs?",
                    strings(["20%", "30%", "40%", "50%"]),
                    1,
                    "The 30% rule suggests that no more than 30% of your gross monthly \
                     income should go to housing costs including rent, mortgage, insurance, \
                     and utilities.",
                    10,
                ),
                QuizQuestion::new(
                    "What is the 50/30/20 budgeting rule?",
                    strings([
                        "50% needs, 30% wants, 20% savings",
                        "50% savings, 30% needs, 20% wants",
                        "50% wants, 30% savings, 20% needs",
                        "50% housing, 30% food, 20% entertainment",
                    ]),
                    0,
                    "The 50/30/20 rule allocates 50% of after-tax income to needs, 30% to \
                     wants, and 20% to savings and debt repayment.",
                    15,
                ),
                QuizQuestion::new(
                    "Which expense category should you prioritize first in your budget?",
                    strings(["Entertainment", "Essential needs", "Luxury items", "Hobbies"]),
                    1,
                    "Essential needs like housing, food, utilities, and transportation should \
                     always be prioritized first in any budget.",
                    10,
                ),
            ],
            Difficulty::Beginner,
            5,
        )?,
        Quiz::new(
            "Investment Fundamentals",
            QuizCategory::Investing,
            vec![
                QuizQuestion::new(
                    "What is compound interest?",
                    strings([
                        "Interest paid only on the principal",
                        "Interest paid on both principal and accumulated interest",
                        "A type of bank account",
                        "A government bond",
                    ]),
                    1,
                    "Compound interest is interest calculated on the initial principal and \
                     also on the accumulated interest from previous periods.",
                    15,
                ),
                QuizQuestion::new(
                    "What does diversification mean in investing?",
                    strings([
                        "Putting all money in one stock",
                        "Spreading investments across different assets",
                        "Only investing in bonds",
                        "Timing the market perfectly",
                    ]),
                    1,
                    "Diversification involves spreading investments across various assets to \
                     reduce risk and potential losses.",
                    15,
                ),
                QuizQuestion::new(
                    "What is a good strategy for beginner investors?",
                    strings([
                        "Day trading",
                        "Picking individual stocks",
                        "Dollar-cost averaging into index funds",
                        "Investing in cryptocurrency only",
                    ]),
                    2,
                    "Dollar-cost averaging into diversified index funds is often recommended \
                     for beginners as it reduces risk and requires less expertise.",
                    20,
                ),
            ],
            Difficulty::Intermediate,
            7,
        )?,
        Quiz::new(
            "Smart Saving Strategies",
            QuizCategory::Savings,
            vec![
                QuizQuestion::new(
                    "How much should you aim to have in an emergency fund?",
                    strings([
                        "1 month of expenses",
                        "3-6 months of expenses",
                        "1 year of expenses",
                        "2 years of expenses",
                    ]),
                    1,
                    "Financial experts typically recommend having 3-6 months of living \
                     expenses saved in an emergency fund for unexpected situations.",
                    15,
                ),
                QuizQuestion::new(
                    "What is the best place to keep your emergency fund?",
                    strings([
                        "Stock market",
                        "High-yield savings account",
                        "Under your mattress",
                        "Cryptocurrency",
                    ]),
                    1,
                    "A high-yield savings account provides liquidity, safety, and some \
                     interest growth for emergency funds.",
                    10,
                ),
            ],
            Difficulty::Beginner,
            4,
        )?,
        Quiz::new(
            "Financial Pop Culture",
            QuizCategory::Entertainment,
            vec![
                QuizQuestion::new(
                    "In the movie 'The Big Short', what financial crisis was depicted?",
                    strings([
                        "The Great Depression",
                        "The 2008 Housing Crisis",
                        "The Dot-com Bubble",
                        "The 1987 Stock Market Crash",
                    ]),
                    1,
                    "The Big Short depicted the events leading up to the 2008 financial \
                     crisis caused by the housing market collapse.",
                    10,
                ),
                QuizQuestion::new(
                    "What does 'HODL' mean in cryptocurrency culture?",
                    strings([
                        "Hold On for Dear Life",
                        "High Order Digital Ledger",
                        "A misspelling of 'hold'",
                        "Both A and C",
                    ]),
                    3,
                    "HODL originated as a misspelling of 'hold' but is now commonly \
                     interpreted as 'Hold On for Dear Life' in crypto communities.",
                    5,
                ),
            ],
            Difficulty::Beginner,
            3,
        )?,
    ])
}

pub(super) fn puzzles() -> Result<Vec<Puzzle>, PuzzleValidationError> {
    Ok(vec![
        Puzzle::new(
            "The Monthly Budget Challenge",
            "Help Sarah optimize her monthly budget to save for her vacation goal.",
            PuzzleKind::BudgetOptimization,
            PuzzleDifficulty::Easy,
            "Sarah earns $4,000 per month after taxes. Her current expenses are: Rent \
             $1,200, Food $600, Transportation $300, Utilities $200, Entertainment $400, \
             Shopping $500, Miscellaneous $300. She wants to save $500 per month for a \
             vacation in 12 months.",
            "Which expense categories should Sarah reduce and by how much to reach her \
             savings goal while maintaining a reasonable lifestyle?",
            "Reduce Entertainment by $150 (to $250), Shopping by $200 (to $300), and \
             Miscellaneous by $150 (to $150). This saves $500 monthly while keeping \
             essential expenses intact.",
            strings([
                "Focus on non-essential categories like entertainment and shopping",
                "Look for the largest discretionary expenses",
                "Consider what's reasonable vs. excessive in each category",
            ]),
            "By reducing entertainment from $400 to $250, shopping from $500 to $300, and \
             miscellaneous from $300 to $150, Sarah can save exactly $500 per month while \
             prioritizing her vacation goal.",
            50,
            10,
        )?,
        Puzzle::new(
            "The Investment Allocation Dilemma",
            "Design an investment portfolio for a 30-year-old professional.",
            PuzzleKind::InvestmentStrategy,
            PuzzleDifficulty::Medium,
            "Alex is 30 years old, has $10,000 to invest, earns $70,000 annually, and wants \
             to retire at 65. Alex has moderate risk tolerance and wants a balanced approach \
             between growth and stability.",
            "What percentage allocation would you recommend for stocks, bonds, and cash, \
             and why?",
            "70% stocks, 25% bonds, 5% cash. This follows the age-based rule (100 - age = \
             stock percentage) with slight adjustment for moderate risk tolerance, providing \
             growth potential while maintaining some stability.",
            strings([
                "Consider Alex's age and time horizon until retirement",
                "Think about the rule of thumb: 100 minus age equals stock percentage",
                "Balance growth needs with risk tolerance",
            ]),
            "At 30, Alex has 35 years until retirement, allowing for higher risk tolerance. \
             The 70/25/5 allocation provides growth through stocks while bonds offer \
             stability and cash provides liquidity for emergencies.",
            75,
            15,
        )?,
        Puzzle::new(
            "The Debt Elimination Strategy",
            "Choose the best strategy to eliminate multiple debts efficiently.",
            PuzzleKind::DebtPayoff,
            PuzzleDifficulty::Medium,
            "Maria has three debts: Credit Card A ($3,000 at 18% APR, minimum $90), Credit \
             Card B ($5,000 at 15% APR, minimum $150), Student Loan ($15,000 at 6% APR, \
             minimum $200). She has an extra $300 monthly to put toward debt repayment.",
            "Should Maria use the debt snowball or debt avalanche method, and what's the \
             optimal payment strategy?",
            "Use debt avalanche: pay minimums on all debts, then put the extra $300 toward \
             the highest interest rate card first. This saves the most money in interest \
             over time.",
            strings([
                "Compare interest rates vs. balance amounts",
                "Consider both psychological and mathematical benefits",
                "Calculate total interest saved with each method",
            ]),
            "The debt avalanche method (paying highest interest rate first) saves more \
             money long-term. Credit Card A at 18% should be paid off first, then Credit \
             Card B at 15%, then the student loan at 6%.",
            60,
            12,
        )?,
        Puzzle::new(
            "The Power of Starting Early",
            "Compare the impact of starting investments at different ages.",
            PuzzleKind::CompoundInterest,
            PuzzleDifficulty::Hard,
            "Twin sisters Amy and Beth both plan to retire at 65. Amy starts investing \
             $200/month at age 25. Beth starts investing $400/month at age 35. Both earn \
             7% annual return.",
            "Who will have more money at retirement, and by approximately how much?",
            "Amy will have approximately $525,000 vs Beth's $472,000 despite a lower \
             percentage of income invested, because her savings compound at the same rate \
             for ten more years.",
            strings([
                "Calculate the total investment period for each sister",
                "Remember that compound interest grows exponentially over time",
                "Consider both the amount invested and the time factor",
            ]),
            "Amy invests for 40 years ($96,000 total) while Beth invests for 30 years \
             ($144,000 total). Despite investing less money, Amy's extra 10 years of \
             compound growth results in more wealth at retirement.",
            100,
            20,
        )?,
        Puzzle::new(
            "The Smart Shopping Challenge",
            "Optimize your shopping strategy to maximize savings.",
            PuzzleKind::LogicPuzzle,
            PuzzleDifficulty::Easy,
            "You're shopping for groceries with a $100 budget. Store A offers 10% off \
             everything. Store B offers buy-one-get-one-free on items over $20. Store C \
             offers $15 off purchases over $75. Your cart has items worth: $25, $30, $20, \
             $15, $10.",
            "Which store gives you the best deal, and what's your final cost?",
            "Store B with the buy-one-get-one-free shopping deal saves the most: the $25 \
             and $30 items qualify, so you save $27.50 off the $100 budget.",
            strings([
                "Calculate the savings at each store carefully",
                "Consider which items qualify for each store's promotion",
                "Don't forget to check if you meet minimum purchase requirements",
            ]),
            "Store A: 10% off $100 = $90. Store B: BOGO on the $25 and $30 items = $72.50. \
             Store C: $15 off $100 = $85. Store B offers the best deal.",
            40,
            8,
        )?,
    ])
}

pub(super) fn tips() -> Vec<FinancialTip> {
    vec![
        FinancialTip::new(
            "Master the 50/30/20 Budget Rule",
            TipCategory::Budgeting,
            "The 50/30/20 rule is one of the most popular budgeting methods: 50% of \
             after-tax income goes to needs you can't avoid (rent, utilities, groceries, \
             minimum debt payments), 30% covers wants (dining out, entertainment, hobbies), \
             and 20% goes to savings and extra debt repayment. It works because it is \
             simple, flexible across income levels, and guarantees you save while still \
             enjoying life. If you carry high-interest debt, temporarily push more than \
             20% at it.",
            strings([
                "50% of income goes to essential needs",
                "30% can be spent on wants and entertainment",
                "20% should be saved or used for debt repayment",
                "Adjust percentages based on your specific situation",
            ]),
            strings([
                "Calculate your after-tax monthly income",
                "List all your current monthly expenses",
                "Categorize expenses into needs, wants, and savings",
                "Compare your current spending to the 50/30/20 targets",
                "Set up automatic transfers for your savings portion",
            ]),
            Difficulty::Beginner,
            5,
            strings(["budgeting", "money management", "personal finance", "savings"]),
            strings(["Emergency Fund Basics", "Debt Payoff Strategies", "Automatic Savings"]),
        ),
        FinancialTip::new(
            "Build Your Emergency Fund: A Step-by-Step Guide",
            TipCategory::EmergencyFund,
            "An emergency fund is money set aside to cover unexpected expenses or income \
             loss. Start with a $1,000 starter goal, then build toward 3-6 months of living \
             expenses (6-12 if your income is irregular). Keep it in a high-yield savings \
             account, not in checking or investments. Build it with small automated \
             transfers and windfalls like tax refunds. Use it only for true emergencies: \
             job loss, medical bills, essential repairs. Vacations and planned purchases \
             don't count.",
            strings([
                "Start with $1,000, then build to 3-6 months of expenses",
                "Keep funds in a high-yield savings account for easy access",
                "Only use for true emergencies, not planned expenses",
                "Automate contributions to build the fund consistently",
            ]),
            strings([
                "Calculate your monthly living expenses",
                "Set a starter goal of $1,000",
                "Open a separate high-yield savings account",
                "Set up automatic monthly transfers",
                "Create clear rules for when to use the fund",
            ]),
            Difficulty::Beginner,
            7,
            strings(["emergency fund", "savings", "financial security"]),
            strings(["High-Yield Savings Accounts", "Budgeting Basics", "Insurance Planning"]),
        ),
        FinancialTip::new(
            "Index Fund Investing for Beginners",
            TipCategory::Investing,
            "Index funds track a market index like the S&P 500 instead of trying to beat \
             it. One fund buys you hundreds or thousands of stocks, expense ratios are \
             typically under 0.20%, and low turnover keeps them tax efficient. For most \
             beginners, dollar-cost averaging a fixed amount into a broad index fund every \
             month outperforms stock picking over the long run. Check whether your employer \
             retirement plan offers a total-market or S&P 500 index option.",
            strings([
                "Index funds give instant diversification at very low cost",
                "They aim to match the market, not beat it",
                "Dollar-cost averaging removes the need to time the market",
            ]),
            strings([
                "Open a brokerage or retirement account",
                "Pick a broad-market index fund with a low expense ratio",
                "Set up an automatic monthly investment",
                "Review your allocation once a year, not once a day",
            ]),
            Difficulty::Intermediate,
            6,
            strings(["investing", "index funds", "retirement"]),
            strings(["Compound Interest", "Retirement Planning", "Risk Tolerance"]),
        ),
        FinancialTip::new(
            "Understand and Improve Your Credit Score",
            TipCategory::CreditManagement,
            "Your credit score is driven mostly by payment history (35%) and credit \
             utilization (30%), with length of history, new credit, and credit mix making \
             up the rest. Pay every bill on time, keep card balances under 30% of their \
             limits (under 10% is better), and don't close your oldest accounts. Check \
             your reports yearly for errors; disputing a mistake is free and can move your \
             score quickly.",
            strings([
                "Payment history and utilization dominate your score",
                "Keep utilization below 30% of available credit",
                "Old accounts help; closing them can hurt",
            ]),
            strings([
                "Pull your free annual credit reports",
                "Set up autopay for at least the minimum on every account",
                "Pay down the card closest to its limit first",
            ]),
            Difficulty::Beginner,
            5,
            strings(["credit", "credit score", "debt"]),
            strings(["Debt Payoff Strategies", "Credit Card Basics"]),
        ),
        FinancialTip::new(
            "Snowball vs. Avalanche: Pick Your Debt Payoff Method",
            TipCategory::DebtReduction,
            "Both methods pay minimums on everything and aim extra money at one debt at a \
             time. The avalanche targets the highest interest rate first and saves the \
             most money. The snowball targets the smallest balance first and builds \
             momentum with quick wins. Mathematically the avalanche wins; behaviorally the \
             snowball keeps many people going. Pick the one you will actually stick with \
             and automate the extra payment.",
            strings([
                "Avalanche = highest interest rate first, least total interest",
                "Snowball = smallest balance first, fastest visible progress",
                "Consistency matters more than the method",
            ]),
            strings([
                "List every debt with its balance, rate, and minimum payment",
                "Choose avalanche or snowball and order your debts",
                "Automate the extra payment toward the target debt",
            ]),
            Difficulty::Intermediate,
            6,
            strings(["debt", "avalanche", "snowball", "interest"]),
            strings(["Credit Score Basics", "Budgeting Basics"]),
        ),
        FinancialTip::new(
            "Pay Yourself First: Automate Your Savings",
            TipCategory::Saving,
            "Willpower is a terrible savings plan. Move money to savings the day you get \
             paid, before you can spend it: a scheduled transfer to a separate account, a \
             retirement contribution straight from payroll, round-up programs for spare \
             change. Start with any amount - even $25 per paycheck builds the habit - and \
             raise it every time your income rises. Savings you never see are savings you \
             never miss.",
            strings([
                "Automate transfers on payday, before discretionary spending",
                "Separate accounts make savings harder to raid",
                "Increase the amount with every raise",
            ]),
            strings([
                "Schedule a transfer for the day after each payday",
                "Open a dedicated savings account at a different bank",
                "Raise your automatic transfer by 1% of income",
            ]),
            Difficulty::Beginner,
            4,
            strings(["saving", "automation", "habits"]),
            strings(["Emergency Fund Basics", "The 50/30/20 Rule"]),
        ),
    ]
}
