//! The SQL answer submitted to the webhook
//!
//! Per department, the employee with the highest total salary (payments made
//! on the first day of a month are excluded), with their name and age.

/// Fixed SQL text, submitted verbatim
const FINAL_QUERY: &str = r"WITH FILTERED_PAYMENTS AS (
    SELECT 
        p.EMP_ID,
        p.AMOUNT,
        p.PAYMENT_TIME
    FROM PAYMENTS p
    WHERE EXTRACT(DAY FROM p.PAYMENT_TIME) != 1
),
TOTAL_SALARY AS (
    SELECT
        e.EMP_ID,
        e.FIRST_NAME,
        e.LAST_NAME,
        e.DOB,
        e.DEPARTMENT,
        SUM(fp.AMOUNT) AS TOTAL_SALARY
    FROM EMPLOYEE e
    JOIN FILTERED_PAYMENTS fp ON e.EMP_ID = fp.EMP_ID
    GROUP BY e.EMP_ID, e.FIRST_NAME, e.LAST_NAME, e.DOB, e.DEPARTMENT
),
MAX_SALARY_PER_DEPT AS (
    SELECT
        DEPARTMENT,
        MAX(TOTAL_SALARY) AS MAX_SALARY
    FROM TOTAL_SALARY
    GROUP BY DEPARTMENT
)
SELECT
    d.DEPARTMENT_NAME,
    ts.TOTAL_SALARY AS SALARY,
    CONCAT(ts.FIRST_NAME, ' ', ts.LAST_NAME) AS EMPLOYEE_NAME,
    FLOOR(DATEDIFF(CURDATE(), ts.DOB) / 365) AS AGE
FROM TOTAL_SALARY ts
JOIN MAX_SALARY_PER_DEPT m
    ON ts.DEPARTMENT = m.DEPARTMENT
AND ts.TOTAL_SALARY = m.MAX_SALARY
JOIN DEPARTMENT d
    ON ts.DEPARTMENT = d.DEPARTMENT_ID
ORDER BY d.DEPARTMENT_NAME;
";

/// SQL text for the solution submission
///
/// Always the same string; it is never templated or parsed.
pub const fn final_query() -> &'static str {
    FINAL_QUERY
}
